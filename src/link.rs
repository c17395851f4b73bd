// ABOUTME: WhatsApp click-to-chat deep-link construction.
// ABOUTME: Spaces in the message become %20; everything else passes through verbatim.

/// Base URL of the WhatsApp click-to-chat service.
pub const WA_ME_BASE: &str = "https://wa.me";

/// Replace every ASCII space in `message` with the literal sequence `%20`.
///
/// Deliberately not a general URL escape: the click-to-chat endpoint
/// tolerates raw reserved characters in `text`, and existing links rely
/// on accented characters arriving unescaped. Only U+0020 is rewritten.
pub fn encode_message(message: &str) -> String {
    message.replace(' ', "%20")
}

/// Build the `https://wa.me/<phone>?text=<message>` deep link.
///
/// `phone` is inserted verbatim; digits are expected but not enforced.
pub fn deep_link(phone: &str, message: &str) -> String {
    format!("{}/{}?text={}", WA_ME_BASE, phone, encode_message(message))
}
