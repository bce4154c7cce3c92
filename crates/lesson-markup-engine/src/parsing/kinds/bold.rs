/// Bold span with owned delimiter constants.
pub struct Bold;

impl Bold {
    /// The opening and closing marker.
    pub const DELIM: &'static str = "**";
    /// The byte the marker is made of; bold content may not contain it.
    pub const STAR: u8 = b'*';

    /// Wraps `text` in bold markers.
    pub fn wrap(text: &str) -> String {
        format!("{delim}{text}{delim}", delim = Self::DELIM)
    }
}
