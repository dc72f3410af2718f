use gpui::{Pixels, Rgba, SharedString, px};
use serde::{Deserialize, Deserializer, de::Error};

pub fn de_font_family<'de, D>(deserializer: D) -> Result<SharedString, D::Error>
where
    D: Deserializer<'de>,
{
    let family = SharedString::deserialize(deserializer)?;

    if family.is_empty() {
        return Err(D::Error::custom("font family can't be empty."));
    }

    Ok(family)
}

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(string) => {
            let string = match string.strip_suffix("px") {
                Some(string) => string,
                None => return Err(D::Error::custom("expected string to end with 'px'")),
            };

            match string.trim().parse::<f32>() {
                Ok(pixels) => Ok(px(pixels)),
                Err(_) => Err(D::Error::custom("could not convert string into pixels")),
            }
        }

        StringOrFloat::Float(pixels) => Ok(px(pixels)),
    }
}

pub fn de_color<'de, D>(deserializer: D) -> Result<Rgba, D::Error>
where
    D: Deserializer<'de>,
{
    let string = String::deserialize(deserializer)?;
    parse_color(&string).map_err(D::Error::custom)
}

/// Parses `#rrggbb`-style hex (delegated to gpui) or `rgb()`/`rgba()`
/// functional notation.
pub(crate) fn parse_color(value: &str) -> Result<Rgba, String> {
    let value = value.trim();

    if let Some(channels) = value.strip_prefix("rgba(").and_then(|v| v.strip_suffix(')')) {
        return parse_channels(channels, true);
    }

    if let Some(channels) = value.strip_prefix("rgb(").and_then(|v| v.strip_suffix(')')) {
        return parse_channels(channels, false);
    }

    Rgba::try_from(value).map_err(|err| err.to_string())
}

fn parse_channels(channels: &str, with_alpha: bool) -> Result<Rgba, String> {
    let mut parts = channels.split(',').map(str::trim);

    let mut channel = |name: &str| -> Result<f32, String> {
        let part = parts
            .next()
            .ok_or_else(|| format!("missing {name} channel"))?;

        let value = part
            .parse::<f32>()
            .map_err(|_| format!("could not parse {name} channel"))?;

        if !(0.0..=255.0).contains(&value) {
            return Err(format!("{name} channel out of range"));
        }

        Ok(value / 255.)
    };

    let r = channel("red")?;
    let g = channel("green")?;
    let b = channel("blue")?;

    let a = if with_alpha {
        let part = parts
            .next()
            .ok_or_else(|| "missing alpha channel".to_string())?;

        let value = part
            .parse::<f32>()
            .map_err(|_| "could not parse alpha channel".to_string())?;

        if !(0.0..=1.0).contains(&value) {
            return Err("alpha channel out of range".to_string());
        }

        value
    } else {
        1.
    };

    if parts.next().is_some() {
        return Err("too many channels".to_string());
    }

    Ok(Rgba { r, g, b, a })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}
