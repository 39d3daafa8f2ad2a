/// Closed enumeration used as a categorical filter dimension.
///
/// `key` is the value the filter engine compares against; `label` is the
/// human-facing text for chips and dropdowns.
pub trait CategoryValue: Copy + Sized + 'static {
    fn ordered() -> &'static [Self];
    fn key(self) -> &'static str;
    fn label(self) -> &'static str;

    fn parse(raw: &str) -> Option<Self> {
        Self::ordered()
            .iter()
            .copied()
            .find(|value| value.key() == raw.trim())
    }

    fn keys() -> Vec<&'static str> {
        Self::ordered().iter().map(|value| value.key()).collect()
    }
}
