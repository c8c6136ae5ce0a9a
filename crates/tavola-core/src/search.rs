//! Menu search matching.

/// Whether a menu item matches `query`.
///
/// Case-insensitive substring match against the title and the optional
/// description. An empty query matches everything.
pub fn matches_query(query: &str, title: &str, description: Option<&str>) -> bool {
	let query = query.to_lowercase();
	title.to_lowercase().contains(&query)
		|| description.is_some_and(|d| d.to_lowercase().contains(&query))
}
