// ABOUTME: Askama templates for the button fragment and the preview page shell.
// ABOUTME: render_button is the library's single entry point for producing markup.

use askama::Template;

use crate::config::ButtonConfig;
use crate::error::Error;

/// The floating button fragment: a fixed-position anchor wrapping the
/// logo image. Attribute values are HTML-escaped by the template engine.
#[derive(Template)]
#[template(path = "button.html")]
pub struct ButtonTemplate {
    pub href: String,
    pub logo: String,
    pub width: u32,
    pub height: u32,
}

impl ButtonTemplate {
    pub fn new(config: &ButtonConfig) -> Self {
        Self {
            href: config.deep_link(),
            logo: config.logo.clone(),
            width: config.width,
            height: config.height,
        }
    }
}

/// Render the widget fragment for embedding into a host page.
pub fn render_button(config: &ButtonConfig) -> Result<String, Error> {
    Ok(ButtonTemplate::new(config).render()?)
}

/// Full preview page with the rendered widget embedded at the end of
/// the body, so the fixed positioning can be eyeballed in a browser.
#[derive(Template)]
#[template(path = "preview.html")]
pub struct PreviewTemplate {
    pub title: String,
    pub link: String,
    pub widget: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_button() {
        let html = render_button(&ButtonConfig::default()).unwrap();
        assert!(html.contains(
            "https://wa.me/3228984861?text=Estás%20comunicándote%20con%20VTEX%20University,%20por%20favor%20ingresa%20tu%20duda."
        ));
        assert!(html.contains(r#"src="mi-logo.png""#));
        assert!(html.contains(r#"width="80""#));
        assert!(html.contains(r#"height="80""#));
        assert!(html.contains(r#"alt="Logo de WhatsApp""#));
    }

    #[test]
    fn test_button_opens_in_new_tab_without_opener() {
        let html = render_button(&ButtonConfig::default()).unwrap();
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noreferrer noopener""#));
    }

    #[test]
    fn test_button_is_pinned_to_the_corner() {
        let html = render_button(&ButtonConfig::default()).unwrap();
        assert!(html.contains("position: fixed"));
        assert!(html.contains("bottom: 0.5rem"));
        assert!(html.contains("right: 0.5rem"));
        assert!(html.contains(r#"class="whatsapp-button""#));
    }

    #[test]
    fn test_render_custom_dimensions() {
        let config = ButtonConfig::new("brand.svg", "5551234567")
            .unwrap()
            .with_size(64, 48);
        let html = render_button(&config).unwrap();
        assert!(html.contains(r#"src="brand.svg""#));
        assert!(html.contains(r#"width="64""#));
        assert!(html.contains(r#"height="48""#));
    }

    #[test]
    fn test_href_is_attribute_escaped_but_link_is_raw() {
        let config = ButtonConfig::new("logo.png", "5551234567")
            .unwrap()
            .with_message("Hola & adiós");
        let html = render_button(&config).unwrap();
        // The template escapes the ampersand inside the attribute; the
        // wire-format link keeps it verbatim.
        assert!(html.contains("text=Hola%20&amp;%20adiós"));
        assert_eq!(
            config.deep_link(),
            "https://wa.me/5551234567?text=Hola%20&%20adiós"
        );
    }

    #[test]
    fn test_preview_page_embeds_the_widget() {
        let config = ButtonConfig::default();
        let page = PreviewTemplate {
            title: "WhatsApp Button Preview".to_string(),
            link: config.deep_link(),
            widget: render_button(&config).unwrap(),
        }
        .render()
        .unwrap();
        assert!(page.contains("<!DOCTYPE html>"));
        assert!(page.contains("WhatsApp Button Preview"));
        assert!(page.contains(r#"class="whatsapp-button""#));
        assert!(page.contains("<a href="));
    }
}
