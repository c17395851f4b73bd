// ABOUTME: CMS admin schema for the widget, built as a static JSON descriptor.
// ABOUTME: Field titles and widget hints drive the site editor form, not the render path.

use serde_json::{json, Value};

/// JSON schema describing the widget's editable fields for a CMS
/// site editor.
///
/// Titles and descriptions are the Spanish merchant-facing copy. The
/// `widget` entries are editor rendering hints: an image uploader for
/// the logo and a textarea for the long-form message.
pub fn admin_schema() -> Value {
    json!({
        "title": "Botón de WhatsApp",
        "type": "object",
        "properties": {
            "logo": {
                "title": "Logo de WhatsApp que se relacione con la marca",
                "type": "string",
                "widget": {
                    "ui:widget": "image-uploader"
                }
            },
            "phone": {
                "title": "Teléfono",
                "description": "Agrega por favor el número de teléfono",
                "type": "string"
            },
            "message": {
                "title": "Mensaje",
                "description": "Agrega por favor el mensaje que se verá para tu cliente",
                "type": "string",
                "widget": {
                    "ui:widget": "textarea"
                }
            },
            "width": {
                "title": "Ancho",
                "description": "Agrega por favor el ancho de la imagen en píxeles",
                "type": "number"
            },
            "height": {
                "title": "Alto",
                "description": "Agrega por favor el alto de la imagen en píxeles",
                "type": "number"
            }
        }
    })
}
