use crate::{
    error::{Error, Result},
    math::{Fl, Vec4},
};

/// Colours known by name, as 8 bit RGB triples. Values follow Tk 8.6, which picked up the
/// web colours for `gray`, `green`, `maroon` and `purple`.
const NAMED: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("blue", [0, 0, 255]),
    ("navy", [0, 0, 128]),
    ("yellow", [255, 255, 0]),
    ("orange", [255, 165, 0]),
    ("purple", [128, 0, 128]),
    ("violet", [238, 130, 238]),
    ("brown", [165, 42, 42]),
    ("maroon", [128, 0, 0]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("lightgray", [211, 211, 211]),
    ("lightgrey", [211, 211, 211]),
    ("darkgray", [169, 169, 169]),
    ("darkgrey", [169, 169, 169]),
    ("pink", [255, 192, 203]),
    ("cyan", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
    ("gold", [255, 215, 0]),
    ("skyblue", [135, 206, 235]),
    ("darkgreen", [0, 100, 0]),
];

/// Resolve a colour name or `#rgb`/`#rrggbb` hex string to an opaque RGBA colour.
///
/// Names are matched case-insensitively and spaces are ignored, so `"Light Gray"` works.
pub fn parse(name: &str) -> Result<Vec4> {
    let unknown = || Error::UnknownColour(name.to_owned());
    let key: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    let rgb = if let Some(hex) = key.strip_prefix('#') {
        parse_hex(hex).ok_or_else(unknown)?
    } else {
        NAMED
            .iter()
            .find(|(known, _)| *known == key)
            .map(|(_, rgb)| *rgb)
            .ok_or_else(unknown)?
    };
    let [r, g, b] = rgb.map(|c| c as Fl / 255.0);
    Ok(Vec4::new(r, g, b, 1))
}

fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let mut out = [0; 3];
            for (i, c) in hex.chars().enumerate() {
                let n = c.to_digit(16)? as u8;
                out[i] = n * 17;
            }
            Some(out)
        }
        6 => {
            let mut out = [0; 3];
            for (i, slot) in out.iter_mut().enumerate() {
                *slot = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok()?;
            }
            Some(out)
        }
        _ => None,
    }
}

/// Convert a colour to 8 bit RGBA channels
pub fn to_rgba8(colour: Vec4) -> [u8; 4] {
    [colour.x(), colour.y(), colour.z(), colour.w()].map(|c| (c.clamp(0.0, 1.0) * 255.99) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve() {
        assert_eq!(to_rgba8(parse("red").unwrap()), [255, 0, 0, 255]);
        assert_eq!(to_rgba8(parse("green").unwrap()), [0, 128, 0, 255]);
        assert_eq!(to_rgba8(parse("White").unwrap()), [255, 255, 255, 255]);
        assert_eq!(to_rgba8(parse("light gray").unwrap()), [211, 211, 211, 255]);
    }

    #[test]
    fn hex_resolves() {
        assert_eq!(to_rgba8(parse("#0080ff").unwrap()), [0, 128, 255, 255]);
        assert_eq!(to_rgba8(parse("#f00").unwrap()), [255, 0, 0, 255]);
    }

    #[test]
    fn unknown_names_are_rejected() {
        for bad in ["chartreuse-ish", "", "#12", "#gggggg", "#ééé"] {
            match parse(bad) {
                Err(Error::UnknownColour(name)) => assert_eq!(name, bad),
                other => panic!("expected unknown colour for {bad:?}, got {other:?}"),
            }
        }
    }
}
