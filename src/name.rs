// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! This module contains the typed names of the vector drawable dialect.
//!
//! Only the names the format defines get an id; everything else stays a
//! string and is skipped by the parser as unknown.

/// List of all supported elements.
#[derive(Clone, Copy, PartialEq, Debug)]
#[allow(missing_docs)]
pub enum ElementId {
    Vector,
    Group,
    Path,
    ClipPath,
    Gradient,
    Item,
}

impl ElementId {
    /// Converts a tag name into an id.
    ///
    /// Returns `None` for names the format does not define.
    pub fn from_str(text: &str) -> Option<ElementId> {
        match text {
            "vector" => Some(ElementId::Vector),
            "group" => Some(ElementId::Group),
            "path" => Some(ElementId::Path),
            "clip-path" => Some(ElementId::ClipPath),
            "gradient" => Some(ElementId::Gradient),
            "item" => Some(ElementId::Item),
            _ => None,
        }
    }

    /// Returns the tag name of the id.
    pub fn name(&self) -> &'static str {
        match *self {
            ElementId::Vector => "vector",
            ElementId::Group => "group",
            ElementId::Path => "path",
            ElementId::ClipPath => "clip-path",
            ElementId::Gradient => "gradient",
            ElementId::Item => "item",
        }
    }
}

/// List of all supported attributes.
///
/// The ids are the local names: the `android:` prefix of the source
/// format is stripped before the lookup.
#[derive(Clone, Copy, PartialEq, Debug)]
#[allow(missing_docs)]
pub enum AttributeId {
    Alpha,
    AutoMirrored,
    CenterColor,
    CenterX,
    CenterY,
    Color,
    EndColor,
    EndX,
    EndY,
    FillAlpha,
    FillColor,
    FillType,
    GradientRadius,
    Height,
    Name,
    Offset,
    PathData,
    PivotX,
    PivotY,
    Rotation,
    ScaleX,
    ScaleY,
    StartColor,
    StartX,
    StartY,
    StrokeAlpha,
    StrokeColor,
    StrokeLineCap,
    StrokeLineJoin,
    StrokeMiterLimit,
    StrokeWidth,
    TranslateX,
    TranslateY,
    Type,
    ViewportHeight,
    ViewportWidth,
    Width,
}

impl AttributeId {
    /// Converts a local attribute name into an id.
    ///
    /// Returns `None` for names the format does not define.
    pub fn from_str(text: &str) -> Option<AttributeId> {
        match text {
            "alpha" => Some(AttributeId::Alpha),
            "autoMirrored" => Some(AttributeId::AutoMirrored),
            "centerColor" => Some(AttributeId::CenterColor),
            "centerX" => Some(AttributeId::CenterX),
            "centerY" => Some(AttributeId::CenterY),
            "color" => Some(AttributeId::Color),
            "endColor" => Some(AttributeId::EndColor),
            "endX" => Some(AttributeId::EndX),
            "endY" => Some(AttributeId::EndY),
            "fillAlpha" => Some(AttributeId::FillAlpha),
            "fillColor" => Some(AttributeId::FillColor),
            "fillType" => Some(AttributeId::FillType),
            "gradientRadius" => Some(AttributeId::GradientRadius),
            "height" => Some(AttributeId::Height),
            "name" => Some(AttributeId::Name),
            "offset" => Some(AttributeId::Offset),
            "pathData" => Some(AttributeId::PathData),
            "pivotX" => Some(AttributeId::PivotX),
            "pivotY" => Some(AttributeId::PivotY),
            "rotation" => Some(AttributeId::Rotation),
            "scaleX" => Some(AttributeId::ScaleX),
            "scaleY" => Some(AttributeId::ScaleY),
            "startColor" => Some(AttributeId::StartColor),
            "startX" => Some(AttributeId::StartX),
            "startY" => Some(AttributeId::StartY),
            "strokeAlpha" => Some(AttributeId::StrokeAlpha),
            "strokeColor" => Some(AttributeId::StrokeColor),
            "strokeLineCap" => Some(AttributeId::StrokeLineCap),
            "strokeLineJoin" => Some(AttributeId::StrokeLineJoin),
            "strokeMiterLimit" => Some(AttributeId::StrokeMiterLimit),
            "strokeWidth" => Some(AttributeId::StrokeWidth),
            "translateX" => Some(AttributeId::TranslateX),
            "translateY" => Some(AttributeId::TranslateY),
            "type" => Some(AttributeId::Type),
            "viewportHeight" => Some(AttributeId::ViewportHeight),
            "viewportWidth" => Some(AttributeId::ViewportWidth),
            "width" => Some(AttributeId::Width),
            _ => None,
        }
    }

    /// Returns the local name of the id.
    pub fn name(&self) -> &'static str {
        match *self {
            AttributeId::Alpha => "alpha",
            AttributeId::AutoMirrored => "autoMirrored",
            AttributeId::CenterColor => "centerColor",
            AttributeId::CenterX => "centerX",
            AttributeId::CenterY => "centerY",
            AttributeId::Color => "color",
            AttributeId::EndColor => "endColor",
            AttributeId::EndX => "endX",
            AttributeId::EndY => "endY",
            AttributeId::FillAlpha => "fillAlpha",
            AttributeId::FillColor => "fillColor",
            AttributeId::FillType => "fillType",
            AttributeId::GradientRadius => "gradientRadius",
            AttributeId::Height => "height",
            AttributeId::Name => "name",
            AttributeId::Offset => "offset",
            AttributeId::PathData => "pathData",
            AttributeId::PivotX => "pivotX",
            AttributeId::PivotY => "pivotY",
            AttributeId::Rotation => "rotation",
            AttributeId::ScaleX => "scaleX",
            AttributeId::ScaleY => "scaleY",
            AttributeId::StartColor => "startColor",
            AttributeId::StartX => "startX",
            AttributeId::StartY => "startY",
            AttributeId::StrokeAlpha => "strokeAlpha",
            AttributeId::StrokeColor => "strokeColor",
            AttributeId::StrokeLineCap => "strokeLineCap",
            AttributeId::StrokeLineJoin => "strokeLineJoin",
            AttributeId::StrokeMiterLimit => "strokeMiterLimit",
            AttributeId::StrokeWidth => "strokeWidth",
            AttributeId::TranslateX => "translateX",
            AttributeId::TranslateY => "translateY",
            AttributeId::Type => "type",
            AttributeId::ViewportHeight => "viewportHeight",
            AttributeId::ViewportWidth => "viewportWidth",
            AttributeId::Width => "width",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_roundtrip_1() {
        assert_eq!(ElementId::from_str("clip-path"), Some(ElementId::ClipPath));
        assert_eq!(ElementId::ClipPath.name(), "clip-path");
        assert_eq!(ElementId::from_str("rect"), None);
    }

    #[test]
    fn attribute_roundtrip_1() {
        assert_eq!(AttributeId::from_str("pathData"), Some(AttributeId::PathData));
        assert_eq!(AttributeId::PathData.name(), "pathData");
        assert_eq!(AttributeId::from_str("pathdata"), None);
    }
}
