use super::ItemId;

/// Field accessors the filtering engine needs from any browsable entry.
///
/// Articles, projects and certificates keep their own display fields; the
/// engine only ever looks at these five.
pub trait CatalogEntry {
    fn id(&self) -> &ItemId;

    /// Raw category value. Depending on the page policy this is either a
    /// single tag or a comma/whitespace separated list of tags.
    fn category(&self) -> &str;

    fn title(&self) -> &str;

    /// Body text searched alongside the title (excerpt or description).
    fn excerpt(&self) -> &str;

    fn tags(&self) -> &[String];
}
