//! Loading style sets from TOML descriptions.
//!
//! A description declares shareable painters, styles and bindings:
//!
//! ```toml
//! [[painter]]
//! id = "button-image"
//! image = "button.png"
//! source_insets = [4, 4, 4, 4]
//!
//! [[style]]
//! id = "default"
//! font = { family = "Dialog", size = 12.0 }
//! colors = { BACKGROUND = "#C0C0C0" }
//!
//! [[style]]
//! id = "button"
//! clone = "default"
//! insets = [2, 6, 2, 6]
//! properties = { "Button.textShiftOffset" = 1, margin = { type = "insets", value = [2, 2, 2, 2] } }
//!
//! [[style.state]]
//! value = "PRESSED"
//! colors = { BACKGROUND = "#A0A0A0" }
//!
//! [[style.painter]]
//! method = "buttonbackground"
//! idref = "button-image"
//!
//! [[bind]]
//! style = "default"
//! type = "region"
//! key = ".*"
//!
//! [[bind]]
//! style = "button"
//! type = "region"
//! key = "Button"
//! ```
//!
//! Painters are given by exactly one of `idref` (a shared painter declared
//! above), `builtin` (a name registered in the [`PainterCatalog`]) or `image`
//! (an inline nine-slice [`ImagePainter`]). Any error aborts the whole load.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use horizon_synth_core::logging::{span_names, targets};
use horizon_synth_render::{Color, Font, Image, Insets, PaintError, PaintResult, Size};
use serde::Deserialize;

use crate::color_type::ColorType;
use crate::painter::{Direction, ImagePainter, PaintMethod, PainterHandle};
use crate::property::PropertyValue;
use crate::resolve::{BindingKind, StyleRepository};
use crate::state::ComponentState;
use crate::style::{StateBuilder, StyleBuilder};
use crate::style_set::StyleSetBuilder;
use crate::{Error, Result};

/// Resolves image paths named in a description.
pub trait ImageLoader: Send + Sync {
    /// Load (or look up) the image at `path`.
    fn load_image(&self, path: &str) -> PaintResult<Image>;
}

/// An [`ImageLoader`] over images registered up front.
#[derive(Debug, Clone, Default)]
pub struct ImageCatalog {
    images: HashMap<String, Image>,
}

impl ImageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image under its own key.
    pub fn insert(&mut self, image: Image) {
        self.images.insert(image.key().to_string(), image);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, image: Image) -> Self {
        self.insert(image);
        self
    }
}

impl ImageLoader for ImageCatalog {
    fn load_image(&self, path: &str) -> PaintResult<Image> {
        self.images
            .get(path)
            .cloned()
            .ok_or_else(|| PaintError::MissingImage(path.to_string()))
    }
}

/// Painters implemented in code that descriptions may refer to by name.
#[derive(Debug, Clone, Default)]
pub struct PainterCatalog {
    painters: HashMap<String, PainterHandle>,
}

impl PainterCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a painter under `name`, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, painter: impl Into<PainterHandle>) {
        self.painters.insert(name.into(), painter.into());
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, name: impl Into<String>, painter: impl Into<PainterHandle>) -> Self {
        self.register(name, painter);
        self
    }

    pub fn get(&self, name: &str) -> Option<&PainterHandle> {
        self.painters.get(name)
    }
}

/// Turns TOML descriptions into style repositories.
pub struct StyleLoader {
    images: Arc<dyn ImageLoader>,
    painters: PainterCatalog,
}

impl StyleLoader {
    /// Create a loader resolving images through `images`.
    pub fn new(images: impl ImageLoader + 'static) -> Self {
        Self {
            images: Arc::new(images),
            painters: PainterCatalog::new(),
        }
    }

    /// Use `painters` to resolve `builtin` painter references.
    pub fn with_painters(mut self, painters: PainterCatalog) -> Self {
        self.painters = painters;
        self
    }

    /// Parse a description and build its style set.
    pub fn load_str(&self, source: &str) -> Result<StyleRepository> {
        let mut set = StyleSetBuilder::new();
        self.load_into(source, &mut set)?;
        Ok(set.build())
    }

    /// Read a description file and build its style set.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<StyleRepository> {
        let path = path.as_ref();
        let _span = tracing::debug_span!(span_names::LOAD, path = %path.display()).entered();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        self.load_str(&source)
    }

    /// Parse a description and add its contents to `set`.
    ///
    /// Ids already registered in `set` may be referenced. On error `set` may
    /// hold part of the description and should be discarded.
    pub fn load_into(&self, source: &str, set: &mut StyleSetBuilder) -> Result<()> {
        let description: Description = toml::from_str(source)?;

        for def in &description.painter {
            let id = def.id.as_deref().ok_or(Error::missing_attribute("painter", "id"))?;
            if def.method.is_some() || def.direction.is_some() {
                tracing::warn!(
                    target: targets::LOADER,
                    id,
                    "method and direction are ignored on shared painters"
                );
            }
            let painter = self.painter(def, set)?;
            set.painter_object(id, painter)?;
        }

        for def in &description.style {
            let mut style = def.attributes().resolve()?.apply(StyleBuilder::new());
            for state in &def.state {
                let mask = match &state.value {
                    Some(expr) => ComponentState::parse(expr)?,
                    None => ComponentState::empty(),
                };
                let attributes = state.attributes().resolve()?;
                let painters = self.painters(&state.painter, set)?;
                style = style.state(mask, |block| {
                    painters
                        .into_iter()
                        .fold(attributes.apply(block), |block, (method, direction, painter)| {
                            block.painter(method, direction, painter)
                        })
                });
            }
            for (method, direction, painter) in self.painters(&def.painter, set)? {
                style = style.painter(method, direction, painter);
            }

            match &def.clone {
                Some(base) => set.define_clone(&def.id, base, style)?,
                None => set.define(&def.id, style)?,
            };
        }

        for def in &description.bind {
            let kind = match def.kind.to_ascii_lowercase().as_str() {
                "region" => BindingKind::Region,
                "name" => BindingKind::Name,
                _ => return Err(Error::unknown_constant("binding type", def.kind.as_str())),
            };
            set.bind(&def.style, kind, &def.key)?;
        }

        tracing::debug!(
            target: targets::LOADER,
            painters = description.painter.len(),
            styles = description.style.len(),
            bindings = description.bind.len(),
            "loaded style description"
        );
        Ok(())
    }

    fn painters(&self, defs: &[PainterDef], set: &StyleSetBuilder) -> Result<Vec<SlotPainter>> {
        defs.iter()
            .map(|def| {
                let (method, direction) = slot(def)?;
                Ok((method, direction, self.painter(def, set)?))
            })
            .collect()
    }

    fn painter(&self, def: &PainterDef, set: &StyleSetBuilder) -> Result<PainterHandle> {
        let sources = [def.idref.is_some(), def.builtin.is_some(), def.image.is_some()];
        match sources.iter().filter(|s| **s).count() {
            0 => return Err(Error::missing_attribute("painter", "image")),
            1 => {}
            _ => {
                return Err(Error::invalid_value(
                    "painter",
                    "exactly one of idref, builtin or image may be given",
                ));
            }
        }

        if let Some(id) = &def.idref {
            return set.painter_ref(id);
        }
        if let Some(name) = &def.builtin {
            return self
                .painters
                .get(name)
                .cloned()
                .ok_or_else(|| Error::UnknownId(name.clone()));
        }

        let path = def.image.as_deref().unwrap_or_default();
        let image = self
            .images
            .load_image(path)
            .map_err(|e| Error::invalid_value("image", e.to_string()))?;
        let source_insets = def
            .source_insets
            .map(Insets::from)
            .ok_or(Error::missing_attribute("painter", "source_insets"))?;

        let mut painter = ImagePainter::new(image, source_insets);
        if let Some(dest) = def.dest_insets {
            painter = painter.dest_insets(Insets::from(dest));
        }
        if let Some(paint_center) = def.paint_center {
            painter = painter.paint_center(paint_center);
        }
        if let Some(tiles) = def.tiles {
            painter = painter.tiles(tiles);
        }
        if let Some(center) = def.center {
            painter = painter.center(center);
        }
        Ok(PainterHandle::new(painter))
    }
}

impl fmt::Debug for StyleLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleLoader")
            .field("painters", &self.painters)
            .finish_non_exhaustive()
    }
}

type SlotPainter = (Option<PaintMethod>, Option<Direction>, PainterHandle);

fn slot(def: &PainterDef) -> Result<(Option<PaintMethod>, Option<Direction>)> {
    let method = def.method.as_deref().map(PaintMethod::parse).transpose()?;
    let direction = def.direction.as_deref().map(Direction::parse).transpose()?;
    Ok((method, direction))
}

/// The attribute setters shared by style and state builders.
trait AttributeSink: Sized {
    fn set_font(self, font: Font) -> Self;
    fn set_color(self, color_type: ColorType, color: Color) -> Self;
    fn set_insets(self, insets: Insets) -> Self;
    fn set_opaque(self, opaque: bool) -> Self;
    fn set_property(self, key: String, value: PropertyValue) -> Self;
}

macro_rules! attribute_sink {
    ($($builder:ty),+) => {
        $(
            impl AttributeSink for $builder {
                fn set_font(self, font: Font) -> Self {
                    self.font(font)
                }
                fn set_color(self, color_type: ColorType, color: Color) -> Self {
                    self.color(color_type, color)
                }
                fn set_insets(self, insets: Insets) -> Self {
                    self.insets(insets)
                }
                fn set_opaque(self, opaque: bool) -> Self {
                    self.opaque(opaque)
                }
                fn set_property(self, key: String, value: PropertyValue) -> Self {
                    self.property(key, value)
                }
            }
        )+
    };
}

attribute_sink!(StyleBuilder, StateBuilder);

struct Attributes<'a> {
    font: Option<&'a Font>,
    colors: &'a HashMap<String, String>,
    insets: Option<[f32; 4]>,
    opaque: Option<bool>,
    properties: &'a HashMap<String, toml::Value>,
}

impl Attributes<'_> {
    /// Parse every attribute, failing on the first bad one.
    fn resolve(&self) -> Result<ResolvedAttributes> {
        let colors = self
            .colors
            .iter()
            .map(|(slot, value)| Ok((ColorType::parse(slot)?, parse_color(slot, value)?)))
            .collect::<Result<Vec<_>>>()?;
        let properties = self
            .properties
            .iter()
            .map(|(key, value)| Ok((key.clone(), parse_property(key, value)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(ResolvedAttributes {
            font: self.font.cloned(),
            colors,
            insets: self.insets.map(Insets::from),
            opaque: self.opaque,
            properties,
        })
    }
}

struct ResolvedAttributes {
    font: Option<Font>,
    colors: Vec<(ColorType, Color)>,
    insets: Option<Insets>,
    opaque: Option<bool>,
    properties: Vec<(String, PropertyValue)>,
}

impl ResolvedAttributes {
    fn apply<B: AttributeSink>(self, mut builder: B) -> B {
        if let Some(font) = self.font {
            builder = builder.set_font(font);
        }
        for (color_type, color) in self.colors {
            builder = builder.set_color(color_type, color);
        }
        if let Some(insets) = self.insets {
            builder = builder.set_insets(insets);
        }
        if let Some(opaque) = self.opaque {
            builder = builder.set_opaque(opaque);
        }
        for (key, value) in self.properties {
            builder = builder.set_property(key, value);
        }
        builder
    }
}

fn parse_color(attribute: &str, value: &str) -> Result<Color> {
    Color::from_hex(value).ok_or_else(|| Error::invalid_value(attribute, format!("'{value}' is not a hex color")))
}

fn parse_property(key: &str, value: &toml::Value) -> Result<PropertyValue> {
    use toml::Value;

    let floats = |value: &Value| -> Option<Vec<f32>> {
        value
            .as_array()?
            .iter()
            .map(|v| v.as_float().or_else(|| v.as_integer().map(|i| i as f64)).map(|f| f as f32))
            .collect()
    };

    match value {
        Value::Boolean(b) => Ok(PropertyValue::Bool(*b)),
        Value::Integer(i) => Ok(PropertyValue::Int(*i)),
        Value::Float(f) => Ok(PropertyValue::Float(*f)),
        Value::String(s) => Ok(PropertyValue::String(s.clone())),
        Value::Table(table) => {
            let kind = table
                .get("type")
                .and_then(Value::as_str)
                .ok_or(Error::missing_attribute("property", "type"))?;
            let inner = table.get("value").ok_or(Error::missing_attribute("property", "value"))?;
            let invalid = || Error::invalid_value(key, format!("expected a {kind} value"));
            match kind {
                "color" => inner.as_str().ok_or_else(invalid).and_then(|s| parse_color(key, s)).map(PropertyValue::Color),
                "insets" => match floats(inner).as_deref() {
                    Some(&[top, left, bottom, right]) => Ok(PropertyValue::Insets(Insets::new(top, left, bottom, right))),
                    _ => Err(invalid()),
                },
                "dimension" => match floats(inner).as_deref() {
                    Some(&[width, height]) => Ok(PropertyValue::Dimension(Size::new(width, height))),
                    _ => Err(invalid()),
                },
                "boolean" | "integer" | "float" | "string" => {
                    let parsed = parse_property(key, inner)?;
                    let matches_kind = matches!(
                        (kind, &parsed),
                        ("boolean", PropertyValue::Bool(_))
                            | ("integer", PropertyValue::Int(_))
                            | ("float", PropertyValue::Float(_))
                            | ("string", PropertyValue::String(_))
                    );
                    if matches_kind { Ok(parsed) } else { Err(invalid()) }
                }
                other => {
                    tracing::warn!(
                        target: targets::LOADER,
                        key,
                        kind = other,
                        "unknown property type, storing value as a string"
                    );
                    Ok(PropertyValue::String(inner.to_string()))
                }
            }
        }
        Value::Array(_) | Value::Datetime(_) => Err(Error::invalid_value(
            key,
            "arrays and dates need an explicit { type, value } table",
        )),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct Description {
    #[serde(default)]
    painter: Vec<PainterDef>,
    #[serde(default)]
    style: Vec<StyleDef>,
    #[serde(default)]
    bind: Vec<BindDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PainterDef {
    id: Option<String>,
    method: Option<String>,
    direction: Option<String>,
    idref: Option<String>,
    builtin: Option<String>,
    image: Option<String>,
    source_insets: Option<[f32; 4]>,
    dest_insets: Option<[f32; 4]>,
    paint_center: Option<bool>,
    tiles: Option<bool>,
    center: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleDef {
    id: String,
    clone: Option<String>,
    font: Option<Font>,
    #[serde(default)]
    colors: HashMap<String, String>,
    insets: Option<[f32; 4]>,
    opaque: Option<bool>,
    #[serde(default)]
    properties: HashMap<String, toml::Value>,
    #[serde(default)]
    state: Vec<StateDef>,
    #[serde(default)]
    painter: Vec<PainterDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StateDef {
    value: Option<String>,
    font: Option<Font>,
    #[serde(default)]
    colors: HashMap<String, String>,
    insets: Option<[f32; 4]>,
    opaque: Option<bool>,
    #[serde(default)]
    properties: HashMap<String, toml::Value>,
    #[serde(default)]
    painter: Vec<PainterDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BindDef {
    style: String,
    #[serde(rename = "type")]
    kind: String,
    key: String,
}

impl StyleDef {
    fn attributes(&self) -> Attributes<'_> {
        Attributes {
            font: self.font.as_ref(),
            colors: &self.colors,
            insets: self.insets,
            opaque: self.opaque,
            properties: &self.properties,
        }
    }
}

impl StateDef {
    fn attributes(&self) -> Attributes<'_> {
        Attributes {
            font: self.font.as_ref(),
            colors: &self.colors,
            insets: self.insets,
            opaque: self.opaque,
            properties: &self.properties,
        }
    }
}
