//! The theme config contract.
//!
//! This is the one document shape the crate validates: colors, fonts, image
//! URLs, copy text, and responsive sizing/position for an embeddable chat
//! widget. The whole contract lives in [`theme_config`](fn.theme_config.html);
//! everything else here is a reusable piece of it.
//!
//! Keep this module in sync with nothing: the validator and the JSON-Schema
//! export both derive their behavior mechanically from the value returned
//! here.

use crate::schema::{Field, Pattern, Schema};
use once_cell::sync::Lazy;
use regex::Regex;

// Accepts #- and 0x-prefixed hex (3 or 6 digits) as well as rgb()/rgba()/
// hsl()/hsla() functional notation. The functional forms are deliberately
// permissive: channel values are not range-checked.
static COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:#|0x)(?:[a-f0-9]{3}|[a-f0-9]{6})\b|(?:rgb|hsl)a?\([^)]*\)")
        .expect("color pattern is valid")
});

static HTTPS_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)https://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)",
    )
    .expect("url pattern is valid")
});

/// A string holding a CSS-style color.
pub fn color() -> Schema {
    Schema::pattern(Pattern::new("color", COLOR.clone()))
}

/// A string holding an `https://` URL.
pub fn https_url() -> Schema {
    Schema::pattern(Pattern::new("https URL", HTTPS_URL.clone()))
}

fn dimensions() -> Schema {
    Schema::object(vec![
        ("width", Field::required(Schema::number())),
        ("height", Field::required(Schema::number())),
    ])
}

/// Responsive width/height, one set per form factor.
pub fn sizing() -> Schema {
    Schema::object(vec![
        ("desktop", Field::required(dimensions())),
        ("mobile", Field::required(dimensions())),
    ])
}

fn offsets() -> Schema {
    Schema::strict_object(vec![
        ("right", Field::required(Schema::number())),
        ("bottom", Field::required(Schema::number())),
    ])
}

/// Responsive right/bottom offsets, one set per form factor.
pub fn position() -> Schema {
    Schema::object(vec![
        ("desktop", Field::required(offsets())),
        ("mobile", Field::required(offsets())),
    ])
}

fn fonts() -> Schema {
    Schema::strict_object(vec![
        ("primaryFontUrl", Field::required(https_url())),
        ("boldFontUrl", Field::required(https_url())),
        ("defaultFontUrl", Field::required(https_url())),
    ])
}

fn images() -> Schema {
    Schema::strict_object(vec![
        ("loadingImage", Field::required(https_url())),
        ("heroBanner", Field::required(https_url())),
        ("unexpectedErrorIcon", Field::required(https_url())),
        ("sessionTimeoutIcon", Field::required(https_url())),
        ("macroArticleIcon", Field::required(https_url())),
        ("tooltip", Field::optional(https_url())),
    ])
}

fn colors() -> Schema {
    Schema::strict_object(vec![
        ("primary", Field::required(color())),
        ("secondary", Field::required(color())),
        (
            "background",
            Field::required(Schema::strict_object(vec![
                ("main", Field::required(color())),
                ("light", Field::required(color())),
                ("accent", Field::required(color())),
                ("header", Field::required(color())),
                ("disabled", Field::required(color())),
                ("element", Field::required(color())),
            ])),
        ),
        (
            "hoverBackground",
            Field::required(Schema::strict_object(vec![
                ("primaryHover", Field::required(color())),
                ("secondaryHover", Field::required(color())),
                ("accentHover", Field::required(color())),
            ])),
        ),
        (
            "messageBackgrounds",
            Field::required(Schema::strict_object(vec![
                ("outbound", Field::required(color())),
                ("inbound", Field::required(color())),
            ])),
        ),
        (
            "text",
            Field::required(Schema::strict_object(vec![
                ("primaryLight", Field::required(color())),
                ("secondaryLight", Field::required(color())),
                ("primaryDark", Field::required(color())),
                ("secondaryDark", Field::required(color())),
                ("disabled", Field::required(color())),
                ("buttonRegular", Field::required(color())),
                ("buttonHover", Field::required(color())),
                ("error", Field::required(color())),
            ])),
        ),
        (
            "border",
            Field::required(Schema::strict_object(vec![
                ("default", Field::required(color())),
                ("dividerOnDark", Field::required(color())),
                ("active", Field::required(color())),
                ("error", Field::required(color())),
                ("disabled", Field::required(color())),
            ])),
        ),
        (
            "controls",
            Field::required(Schema::strict_object(vec![
                ("uncheckedControl", Field::required(color())),
                ("inboundChecked", Field::required(color())),
                ("outboundChecked", Field::required(color())),
                ("disabledControl", Field::required(color())),
            ])),
        ),
        (
            "launcher",
            Field::optional(Schema::strict_object(vec![
                ("background", Field::optional(color())),
                ("hoverBackground", Field::optional(color())),
            ])),
        ),
        (
            "link",
            Field::required(Schema::strict_object(vec![
                ("inboundDefaultLink", Field::required(color())),
                ("inboundDisabledLink", Field::required(color())),
                ("inboundHoverLink", Field::required(color())),
                ("outboundDefaultLink", Field::required(color())),
                ("outboundDisabledLink", Field::required(color())),
                ("outboundHoverLink", Field::required(color())),
            ])),
        ),
        (
            "ratingIcon",
            Field::required(Schema::strict_object(vec![
                ("INBOUND", Field::required(color())),
                ("OUTBOUND", Field::required(color())),
            ])),
        ),
        ("boxShadow", Field::required(color())),
    ])
}

fn copy_text() -> Schema {
    Schema::strict_object(vec![
        ("partnerFriendlyName", Field::required(Schema::string())),
        ("uppercaseButtonText", Field::required(Schema::boolean())),
        ("routeToAgentMessage", Field::optional(Schema::string())),
    ])
}

fn launcher() -> Schema {
    Schema::strict_object(vec![
        ("initializeFromLauncher", Field::required(Schema::boolean())),
        ("imageSrc", Field::required(https_url())),
        ("position", Field::optional(position())),
        ("sizing", Field::required(sizing())),
    ])
}

fn main_widget() -> Schema {
    Schema::strict_object(vec![
        ("position", Field::required(position())),
        ("sizing", Field::optional(sizing())),
    ])
}

/// The root of the theme config contract.
pub fn theme_config() -> Schema {
    Schema::strict_object(vec![
        ("isDefault", Field::optional(Schema::boolean())),
        ("fonts", Field::required(fonts())),
        ("images", Field::required(images())),
        ("colors", Field::required(colors())),
        ("text", Field::required(copy_text())),
        ("launcher", Field::required(launcher())),
        ("mainWidget", Field::optional(main_widget())),
    ])
}

/// The document an operator starts from when nothing has been persisted yet.
///
/// Deliberately imperfect sample text (bad quotes, stray keys, not even JSON)
/// taken from a real hand-edited config; the point of the tool is to walk an
/// operator from something like this to a clean, valid document.
pub const INITIAL_DOCUMENT: &str = r#"colors: {
  primary: '#000000',
  secondary: '#60269E',


  background: {
    main: '#FFFFFF',
    light: '#FFFFFFF',
    accent: '#60269E’,
    disabled: '#EDEDED',
    element: '#EDEDED',
    header: '#000000’,
  },


  hoverBackground: {
    primaryHover: '#F1E9F9’,
    secondaryHover: '#292929',
    accentHover: '#7947AD',
  },


  messageBackgrounds: {
    outbound: '#F4F4F4',
    inbound: '#60269E',
  },


  text: {
    primaryDark: '#000000',
    secondaryDark: '#757575',
    primaryLight: '#FFFFFF',
    secondaryLight: '#E4CBFF',
    disabled: '#ACACAC',
    buttonRegular: '#60269E',
    buttonHover: '#7947AD',
    error: '#FF6D6D',
    qr: '#60269E',
  },


  border: {
    default: '#D4D4D4’,
    active: '#60269E’,
    disabled: '#D4D4D4’,
    error: '#FF6D6D’,
    dividerOnDark: '#7947AD’,
  },


  controls: {
    uncheckedControl: ‘#ACACAC’,
    inboundChecked: '#FFFFFF’,
    outboundChecked: '#60269E’,
    disabledControl: '#D4D4D4’,
  },


  ratingIcon: {
    INBOUND: '#F9D51C’,
    OUTBOUND: '#000000’,
  },


  launcher: {
    background: ‘#60269E’,
    hoverBackground: ‘#7947AD’,
    imageSrc: ,
    initializeFromLauncher: true,
    boxShadow: '0px 12px 16px 0px ##40166D (24%)',
  },


 link: {       inboundDefaultLink: '#FFFFFF',       outboundDefaultLink: '#3115F2’,
    inboundHoverLink: '#FFFFFF',       outboundHoverLink: '#21137A’,
    inboundDisabledLink: '#FFFFFF (56%)’,       outboundDisabledLink: '#5C5C5C’,
  },


  accent: {
    preTransitAccent: '#EF6C00',
    inTransitAccent: '#512DA8’,
    successAccent: '#388E3C’,
    noInfoAccent: '#757575’,
  },


  system: {
    errorIcon: '#EC5427',
    errorHoverIcon: '#DA3F11’,
  },

}"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;

    fn matches(schema: &Schema, text: &str) -> bool {
        match schema {
            Schema::Primitive {
                pattern: Some(pattern),
                ..
            } => pattern.is_match(text),
            _ => panic!("expected a pattern schema"),
        }
    }

    #[test]
    fn color_accepts_hex_and_functional_notation() {
        let color = color();
        assert!(matches(&color, "#fff"));
        assert!(matches(&color, "#60269E"));
        assert!(matches(&color, "0xABCDEF"));
        assert!(matches(&color, "rgb(1, 2, 3)"));
        assert!(matches(&color, "rgba(0, 0, 0, 0.24)"));
        assert!(matches(&color, "hsl(120, 50%, 50%)"));
        assert!(matches(&color, "hsla(120, 50%, 50%, 0.3)"));
    }

    #[test]
    fn color_does_not_range_check_channels() {
        // Permissive on purpose: anything between the parens goes.
        assert!(matches(&color(), "rgb(999, -4, banana)"));
    }

    #[test]
    fn color_rejects_names_and_short_hex() {
        let color = color();
        assert!(!matches(&color, "blue"));
        assert!(!matches(&color, "#ff"));
        assert!(!matches(&color, "60269E"));
    }

    #[test]
    fn url_requires_https() {
        let url = https_url();
        assert!(matches(&url, "https://cdn.example.com/img.png"));
        assert!(matches(&url, "https://www.example.com"));
        assert!(!matches(&url, "http://cdn.example.com/img.png"));
        assert!(!matches(&url, "not a url"));
    }

    #[test]
    fn root_declares_the_expected_fields_in_order() {
        match theme_config() {
            Schema::Object { fields, strict } => {
                assert!(strict);
                let names: Vec<&str> = fields.keys().map(|k| k.as_str()).collect();
                assert_eq!(
                    names,
                    vec![
                        "isDefault",
                        "fonts",
                        "images",
                        "colors",
                        "text",
                        "launcher",
                        "mainWidget"
                    ]
                );
                assert!(fields["isDefault"].is_optional());
                assert!(fields["mainWidget"].is_optional());
                assert!(!fields["colors"].is_optional());
            }
            _ => panic!("expected an object schema"),
        }
    }
}
