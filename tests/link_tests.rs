// ABOUTME: Tests for the chat deep link produced from a resolved configuration
// ABOUTME: Verifies the wa.me URL shape and the space-only message encoding

use whatsapp_button::{deep_link, ButtonConfig};

#[test]
fn test_default_config_deep_link() {
    let config = ButtonConfig::default();
    assert_eq!(
        config.deep_link(),
        "https://wa.me/3228984861?text=Estás%20comunicándote%20con%20VTEX%20University,%20por%20favor%20ingresa%20tu%20duda."
    );
}

#[test]
fn test_explicit_phone_and_message() {
    let config = ButtonConfig::new("logo.png", "5551234567")
        .unwrap()
        .with_message("Hi there");
    assert_eq!(
        config.deep_link(),
        "https://wa.me/5551234567?text=Hi%20there"
    );
}

#[test]
fn test_every_space_becomes_percent_20() {
    let config = ButtonConfig::new("logo.png", "5551234567")
        .unwrap()
        .with_message("a b c d e");
    let link = config.deep_link();
    let query = link.split("?text=").nth(1).unwrap();
    assert_eq!(query.matches("%20").count(), 4);
    assert!(!query.contains(' '));
}

#[test]
fn test_non_space_characters_pass_through() {
    // Only ASCII spaces are rewritten; punctuation, accents, and even
    // characters a general URL encoder would escape stay verbatim.
    let config = ButtonConfig::new("logo.png", "5551234567")
        .unwrap()
        .with_message("¿Precio? 50% off & más");
    assert_eq!(
        config.deep_link(),
        "https://wa.me/5551234567?text=¿Precio?%2050%%20off%20&%20más"
    );
}

#[test]
fn test_empty_message_yields_empty_query_value() {
    let config = ButtonConfig::new("logo.png", "5551234567")
        .unwrap()
        .with_message("");
    assert_eq!(config.deep_link(), "https://wa.me/5551234567?text=");
}

#[test]
fn test_phone_is_used_verbatim() {
    let link = deep_link("+57 322 898 4861", "hola");
    // The phone segment is not encoded or normalized
    assert_eq!(link, "https://wa.me/+57 322 898 4861?text=hola");
}
