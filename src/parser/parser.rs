// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::str;

use document::{
    ClipPath,
    Document,
    Element,
    Gradient,
    GradientKind,
    GradientStop,
    Group,
    Path,
};
use error::{ErrorKind, ParseError};
use name::{AttributeId, ElementId};
use stream::StrSpan;
use types::ColorRef;
use xml::{ElementEnd, Token, Tokenizer};

use super::attributes::{
    self,
    GradientType,
};
use super::ParseOptions;

pub fn parse_document(data: &[u8], opt: &ParseOptions) -> Result<Document, ParseError> {
    match str::from_utf8(data) {
        Ok(text) => parse_document_str(text, opt),
        Err(e) => Err(ParseError::new(ErrorKind::InvalidByteSequence, e.valid_up_to())),
    }
}

// The root element under construction. The intrinsic size is optional
// in the input and defaults to the viewport size.
struct VectorFrame {
    name: Option<String>,
    width: Option<f64>,
    height: Option<f64>,
    viewport_width: Option<f64>,
    viewport_height: Option<f64>,
    alpha: f64,
    auto_mirrored: bool,
    children: Vec<Element>,
}

struct GradientFrame {
    kind: GradientType,
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    center_x: f64,
    center_y: f64,
    radius: Option<f64>,
    start_color: Option<ColorRef>,
    center_color: Option<ColorRef>,
    end_color: Option<ColorRef>,
    stops: Vec<GradientStop>,
}

impl GradientFrame {
    fn finalize(self) -> Gradient {
        let kind = match self.kind {
            GradientType::Linear => {
                GradientKind::Linear {
                    start_x: self.start_x,
                    start_y: self.start_y,
                    end_x: self.end_x,
                    end_y: self.end_y,
                }
            }
            GradientType::Radial => {
                GradientKind::Radial {
                    center_x: self.center_x,
                    center_y: self.center_y,
                    radius: self.radius.unwrap_or(0.0),
                }
            }
        };

        let mut stops = self.stops;
        if stops.is_empty() {
            // without explicit stops the start/center/end colors
            // describe the ramp
            if let Some(color) = self.start_color {
                stops.push(GradientStop { offset: 0.0, color });
            }
            if let Some(color) = self.center_color {
                stops.push(GradientStop { offset: 0.5, color });
            }
            if let Some(color) = self.end_color {
                stops.push(GradientStop { offset: 1.0, color });
            }
        }

        Gradient { kind, stops }
    }
}

struct ItemFrame {
    offset: Option<f64>,
    color: Option<ColorRef>,
}

// An element with its attributes decoded, but its children still
// incoming. The booleans on `Path`/`ClipPath` track whether the
// required `pathData` was seen.
enum Node {
    Vector(VectorFrame),
    Group(Group),
    Path(Path, bool),
    ClipPath(ClipPath, bool),
    Gradient(GradientFrame),
    Item(ItemFrame),
}

impl Node {
    fn id(&self) -> ElementId {
        match *self {
            Node::Vector(_) => ElementId::Vector,
            Node::Group(_) => ElementId::Group,
            Node::Path(..) => ElementId::Path,
            Node::ClipPath(..) => ElementId::ClipPath,
            Node::Gradient(_) => ElementId::Gradient,
            Node::Item(_) => ElementId::Item,
        }
    }
}

pub fn parse_document_str(text: &str, opt: &ParseOptions) -> Result<Document, ParseError> {
    let mut tokens = Tokenizer::from_str(text);

    let mut doc: Option<Document> = None;
    let mut stack: Vec<Node> = Vec::new();
    let mut pending: Option<(Node, usize)> = None;

    while let Some(token) = tokens.next() {
        match token? {
            Token::ElementStart(name) => {
                match ElementId::from_str(local_name(name.to_str())) {
                    Some(eid) => {
                        let node = open_element(eid, name.start(), &stack, &doc)?;
                        pending = Some((node, name.start()));
                    }
                    None => {
                        if !opt.skip_unknown_elements {
                            return Err(ParseError::new(ErrorKind::InvalidHierarchy,
                                                       name.start()));
                        }

                        warn!("Skipping unknown element '{}'.", name);
                        skip_element(&mut tokens)?;
                    }
                }
            }
            Token::Attribute(name, value) => {
                // the tokenizer yields attributes only inside an open tag
                let &mut (ref mut node, _) = pending.as_mut().unwrap();
                process_attribute(node, name, value)?;
            }
            Token::ElementEnd(ElementEnd::Open) => {
                if let Some((node, tag_pos)) = pending.take() {
                    check_required_attributes(&node, tag_pos)?;
                    stack.push(node);
                }
            }
            Token::ElementEnd(ElementEnd::Empty) => {
                if let Some((node, tag_pos)) = pending.take() {
                    check_required_attributes(&node, tag_pos)?;
                    attach(node, &mut stack, &mut doc);
                }
            }
            Token::ElementEnd(ElementEnd::Close(name)) => {
                let node = match stack.pop() {
                    Some(node) => node,
                    None => {
                        return Err(ParseError::new(ErrorKind::InvalidHierarchy,
                                                   name.start()));
                    }
                };

                if ElementId::from_str(local_name(name.to_str())) != Some(node.id()) {
                    return Err(ParseError::new(ErrorKind::InvalidHierarchy, name.start()));
                }

                attach(node, &mut stack, &mut doc);
            }
            Token::Text(content) => {
                warn!("Skipping text content '{}'.", content.to_str().trim());
            }
            Token::Comment(_) | Token::Declaration(_) => {}
        }
    }

    if !stack.is_empty() {
        // the input ended with unclosed elements
        return Err(ParseError::new(ErrorKind::UnexpectedEndOfInput, tokens.pos()));
    }

    match doc {
        Some(doc) => Ok(doc),
        None => Err(ParseError::new(ErrorKind::UnexpectedEndOfInput, tokens.pos())),
    }
}

// The name without its namespace prefix.
fn local_name(name: &str) -> &str {
    match name.rfind(':') {
        Some(i) => &name[i + 1..],
        None => name,
    }
}

fn open_element(
    eid: ElementId,
    pos: usize,
    stack: &[Node],
    doc: &Option<Document>,
) -> Result<Node, ParseError> {
    let err = || Err(ParseError::new(ErrorKind::InvalidHierarchy, pos));

    match stack.last() {
        None => {
            // only a single root 'vector' may appear at the top level
            if eid != ElementId::Vector || doc.is_some() {
                return err();
            }

            Ok(Node::Vector(VectorFrame {
                name: None,
                width: None,
                height: None,
                viewport_width: None,
                viewport_height: None,
                alpha: 1.0,
                auto_mirrored: false,
                children: Vec::new(),
            }))
        }
        Some(&Node::Vector(_)) | Some(&Node::Group(_)) => {
            match eid {
                ElementId::Group => Ok(Node::Group(Group::default())),
                ElementId::Path => Ok(Node::Path(Path::default(), false)),
                ElementId::ClipPath => Ok(Node::ClipPath(ClipPath::default(), false)),
                _ => err(),
            }
        }
        Some(&Node::Path(ref path, _)) => {
            if eid != ElementId::Gradient || path.gradient.is_some() {
                return err();
            }

            Ok(Node::Gradient(GradientFrame {
                kind: GradientType::Linear,
                start_x: 0.0,
                start_y: 0.0,
                end_x: 0.0,
                end_y: 0.0,
                center_x: 0.0,
                center_y: 0.0,
                radius: None,
                start_color: None,
                center_color: None,
                end_color: None,
                stops: Vec::new(),
            }))
        }
        Some(&Node::Gradient(_)) => {
            if eid != ElementId::Item {
                return err();
            }

            Ok(Node::Item(ItemFrame { offset: None, color: None }))
        }
        Some(&Node::ClipPath(..)) | Some(&Node::Item(_)) => err(),
    }
}

fn process_attribute(
    node: &mut Node,
    name: StrSpan,
    value: StrSpan,
) -> Result<(), ParseError> {
    let full_name = name.to_str();

    // namespace declarations are not attributes of the model
    if full_name == "xmlns" || full_name.starts_with("xmlns:") {
        return Ok(());
    }

    let aid = match AttributeId::from_str(local_name(full_name)) {
        Some(aid) => aid,
        None => {
            warn!("Skipping unknown attribute '{}'.", name);
            return Ok(());
        }
    };

    use self::attributes as a;

    match *node {
        Node::Vector(ref mut v) => {
            match aid {
                AttributeId::Name => v.name = Some(value.to_str().to_string()),
                AttributeId::Width => v.width = Some(a::parse_dimension(value)?),
                AttributeId::Height => v.height = Some(a::parse_dimension(value)?),
                AttributeId::ViewportWidth => {
                    v.viewport_width = Some(a::parse_positive_number(value)?);
                }
                AttributeId::ViewportHeight => {
                    v.viewport_height = Some(a::parse_positive_number(value)?);
                }
                AttributeId::Alpha => v.alpha = a::parse_number(value)?,
                AttributeId::AutoMirrored => v.auto_mirrored = a::parse_bool(value)?,
                _ => warn_not_applicable(name, node),
            }
        }
        Node::Group(ref mut g) => {
            match aid {
                AttributeId::Name => g.name = Some(value.to_str().to_string()),
                AttributeId::Rotation => g.rotation = a::parse_number(value)?,
                AttributeId::PivotX => g.pivot_x = a::parse_number(value)?,
                AttributeId::PivotY => g.pivot_y = a::parse_number(value)?,
                AttributeId::ScaleX => g.scale_x = a::parse_number(value)?,
                AttributeId::ScaleY => g.scale_y = a::parse_number(value)?,
                AttributeId::TranslateX => g.translate_x = a::parse_number(value)?,
                AttributeId::TranslateY => g.translate_y = a::parse_number(value)?,
                _ => warn_not_applicable(name, node),
            }
        }
        Node::Path(ref mut p, ref mut has_data) => {
            match aid {
                AttributeId::Name => p.name = Some(value.to_str().to_string()),
                AttributeId::PathData => {
                    p.data = a::parse_path_data(value)?;
                    *has_data = true;
                }
                AttributeId::FillColor => p.fill = Some(a::parse_color_ref(value)?),
                AttributeId::FillAlpha => p.fill_alpha = a::parse_number(value)?,
                AttributeId::FillType => p.fill_type = a::parse_fill_type(value)?,
                AttributeId::StrokeColor => p.stroke = Some(a::parse_color_ref(value)?),
                AttributeId::StrokeWidth => p.stroke_width = a::parse_number(value)?,
                AttributeId::StrokeAlpha => p.stroke_alpha = a::parse_number(value)?,
                AttributeId::StrokeLineCap => p.stroke_line_cap = a::parse_line_cap(value)?,
                AttributeId::StrokeLineJoin => {
                    p.stroke_line_join = a::parse_line_join(value)?;
                }
                AttributeId::StrokeMiterLimit => {
                    p.stroke_miter_limit = a::parse_number(value)?;
                }
                _ => warn_not_applicable(name, node),
            }
        }
        Node::ClipPath(ref mut c, ref mut has_data) => {
            match aid {
                AttributeId::Name => c.name = Some(value.to_str().to_string()),
                AttributeId::PathData => {
                    c.data = a::parse_path_data(value)?;
                    *has_data = true;
                }
                _ => warn_not_applicable(name, node),
            }
        }
        Node::Gradient(ref mut g) => {
            match aid {
                AttributeId::Type => g.kind = a::parse_gradient_type(value)?,
                AttributeId::StartX => g.start_x = a::parse_number(value)?,
                AttributeId::StartY => g.start_y = a::parse_number(value)?,
                AttributeId::EndX => g.end_x = a::parse_number(value)?,
                AttributeId::EndY => g.end_y = a::parse_number(value)?,
                AttributeId::CenterX => g.center_x = a::parse_number(value)?,
                AttributeId::CenterY => g.center_y = a::parse_number(value)?,
                AttributeId::GradientRadius => g.radius = Some(a::parse_number(value)?),
                AttributeId::StartColor => g.start_color = Some(a::parse_color_ref(value)?),
                AttributeId::CenterColor => {
                    g.center_color = Some(a::parse_color_ref(value)?);
                }
                AttributeId::EndColor => g.end_color = Some(a::parse_color_ref(value)?),
                _ => warn_not_applicable(name, node),
            }
        }
        Node::Item(ref mut item) => {
            match aid {
                AttributeId::Offset => item.offset = Some(a::parse_number(value)?),
                AttributeId::Color => item.color = Some(a::parse_color_ref(value)?),
                _ => warn_not_applicable(name, node),
            }
        }
    }

    Ok(())
}

fn warn_not_applicable(name: StrSpan, node: &Node) {
    warn!("Attribute '{}' is not applicable to '{}' and will be skipped.",
          name, node.id().name());
}

fn check_required_attributes(node: &Node, tag_pos: usize) -> Result<(), ParseError> {
    let err = || Err(ParseError::new(ErrorKind::MissingRequiredAttribute, tag_pos));

    match *node {
        Node::Vector(ref v) => {
            if v.viewport_width.is_none() || v.viewport_height.is_none() {
                return err();
            }
        }
        Node::Path(_, has_data) | Node::ClipPath(_, has_data) => {
            if !has_data {
                return err();
            }
        }
        Node::Gradient(ref g) => {
            if g.kind == GradientType::Radial && g.radius.is_none() {
                return err();
            }
        }
        Node::Item(ref item) => {
            if item.offset.is_none() || item.color.is_none() {
                return err();
            }
        }
        Node::Group(_) => {}
    }

    Ok(())
}

fn attach(node: Node, stack: &mut Vec<Node>, doc: &mut Option<Document>) {
    let element = match node {
        Node::Vector(v) => {
            // checked in `check_required_attributes`
            let viewport_width = v.viewport_width.unwrap();
            let viewport_height = v.viewport_height.unwrap();

            *doc = Some(Document {
                name: v.name,
                width: v.width.unwrap_or(viewport_width),
                height: v.height.unwrap_or(viewport_height),
                viewport_width,
                viewport_height,
                alpha: v.alpha,
                auto_mirrored: v.auto_mirrored,
                children: v.children,
            });

            return;
        }
        Node::Group(g) => Element::Group(g),
        Node::Path(p, _) => Element::Path(p),
        Node::ClipPath(c, _) => Element::ClipPath(c),
        Node::Gradient(g) => {
            // the hierarchy check guarantees the parent is a path
            if let Some(&mut Node::Path(ref mut p, _)) = stack.last_mut() {
                p.gradient = Some(g.finalize());
            }

            return;
        }
        Node::Item(item) => {
            if let Some(&mut Node::Gradient(ref mut g)) = stack.last_mut() {
                g.stops.push(GradientStop {
                    offset: item.offset.unwrap(),
                    color: item.color.unwrap(),
                });
            }

            return;
        }
    };

    match stack.last_mut() {
        Some(&mut Node::Vector(ref mut v)) => v.children.push(element),
        Some(&mut Node::Group(ref mut g)) => g.children.push(element),
        _ => {}
    }
}

fn skip_element(tokens: &mut Tokenizer) -> Result<(), ParseError> {
    let mut depth = 0;

    while let Some(token) = tokens.next() {
        match token? {
            Token::ElementEnd(ElementEnd::Empty) => {
                if depth == 0 {
                    return Ok(());
                }
            }
            Token::ElementEnd(ElementEnd::Open) => depth += 1,
            Token::ElementEnd(ElementEnd::Close(_)) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            _ => {}
        }
    }

    Err(ParseError::new(ErrorKind::UnexpectedEndOfInput, tokens.pos()))
}
