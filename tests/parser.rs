// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate vectordom;
#[macro_use]
extern crate pretty_assertions;

use vectordom::types::path::Primitive;
use vectordom::types::{Color, ColorRef};
use vectordom::{
    Document,
    Element,
    ErrorKind,
    FillType,
    GradientKind,
    LineCap,
    ParseOptions,
};

macro_rules! test_err {
    ($name:ident, $text:expr, $kind:expr) => (
        #[test]
        fn $name() {
            let e = Document::from_str($text).unwrap_err();
            assert_eq!(e.kind(), $kind);
        }
    )
}

#[test]
fn parse_minimal_1() {
    let doc = Document::from_str(
        "<vector xmlns:android='http://schemas.android.com/apk/res/android' \
                 android:viewportWidth='24' android:viewportHeight='24'/>").unwrap();

    assert_eq!(doc.viewport_width(), 24.0);
    assert_eq!(doc.viewport_height(), 24.0);
    // the intrinsic size defaults to the viewport size
    assert_eq!(doc.width(), 24.0);
    assert_eq!(doc.height(), 24.0);
    assert!(doc.children().is_empty());
}

#[test]
fn parse_sizes_1() {
    let doc = Document::from_str(
        "<vector android:width='24dp' android:height='12dp' \
                 android:viewportWidth='48' android:viewportHeight='24'/>").unwrap();

    assert_eq!(doc.width(), 24.0);
    assert_eq!(doc.height(), 12.0);
    assert_eq!(doc.viewport_width(), 48.0);
    assert_eq!(doc.viewport_height(), 24.0);
}

#[test]
fn parse_root_attributes_1() {
    let doc = Document::from_str(
        "<vector android:name='icon' android:alpha='0.5' android:autoMirrored='true' \
                 android:viewportWidth='24' android:viewportHeight='24'/>").unwrap();

    assert_eq!(doc.name(), Some("icon"));
    assert_eq!(doc.alpha(), 0.5);
    assert!(doc.auto_mirrored());
}

#[test]
fn parse_hierarchy_1() {
    let doc = Document::from_str(
        "<vector android:viewportWidth='24' android:viewportHeight='24'>
            <group android:name='g'>
                <clip-path android:pathData='M 0 0 H 24 V 24 H 0 Z'/>
                <path android:pathData='M 1 1 L 2 2'/>
                <group>
                    <path android:pathData='M 3 3'/>
                </group>
            </group>
            <path android:pathData='M 4 4'/>
        </vector>").unwrap();

    assert_eq!(doc.children().len(), 2);

    match doc.children()[0] {
        Element::Group(ref g) => {
            assert_eq!(g.name.as_ref().map(|n| n.as_str()), Some("g"));
            assert_eq!(g.children.len(), 3);
            assert!(match g.children[0] { Element::ClipPath(_) => true, _ => false });
            assert!(match g.children[1] { Element::Path(_) => true, _ => false });
            assert!(match g.children[2] { Element::Group(_) => true, _ => false });
        }
        _ => panic!("expected a group"),
    }

    assert!(match doc.children()[1] { Element::Path(_) => true, _ => false });
}

#[test]
fn parse_path_attributes_1() {
    let doc = Document::from_str(
        "<vector android:viewportWidth='24' android:viewportHeight='24'>
            <path android:name='p'
                  android:pathData='M 0 0 L 10 10'
                  android:fillColor='#ff112233'
                  android:fillType='evenOdd'
                  android:strokeColor='@color/accent'
                  android:strokeWidth='2'
                  android:strokeAlpha='0.5'
                  android:strokeLineCap='round'/>
        </vector>").unwrap();

    let path = match doc.children()[0] {
        Element::Path(ref p) => p,
        _ => panic!("expected a path"),
    };

    assert_eq!(path.name.as_ref().map(|n| n.as_str()), Some("p"));
    assert_eq!(path.data.d, vec![
        Primitive::MoveTo { x: 0.0, y: 0.0 },
        Primitive::LineTo { x: 10.0, y: 10.0 },
    ]);
    assert_eq!(path.fill, Some(ColorRef::Color(Color::new(0x11, 0x22, 0x33))));
    assert_eq!(path.fill_type, FillType::EvenOdd);
    assert_eq!(path.stroke, Some(ColorRef::Resource("color/accent".to_string())));
    assert_eq!(path.stroke_width, 2.0);
    assert_eq!(path.stroke_alpha, 0.5);
    assert_eq!(path.stroke_line_cap, LineCap::Round);
}

#[test]
fn parse_gradient_1() {
    let doc = Document::from_str(
        "<vector android:viewportWidth='24' android:viewportHeight='24'>
            <path android:pathData='M 0 0 L 10 10'>
                <gradient android:startX='0' android:startY='0'
                          android:endX='24' android:endY='0'>
                    <item android:offset='0' android:color='#ff0000'/>
                    <item android:offset='0.5' android:color='?attr/mid'/>
                    <item android:offset='1' android:color='#0000ff'/>
                </gradient>
            </path>
        </vector>").unwrap();

    let path = match doc.children()[0] {
        Element::Path(ref p) => p,
        _ => panic!("expected a path"),
    };

    let gradient = path.gradient.as_ref().unwrap();
    assert_eq!(gradient.kind, GradientKind::Linear {
        start_x: 0.0, start_y: 0.0, end_x: 24.0, end_y: 0.0,
    });

    // stops keep their declaration order
    assert_eq!(gradient.stops.len(), 3);
    assert_eq!(gradient.stops[0].offset, 0.0);
    assert_eq!(gradient.stops[1].offset, 0.5);
    assert_eq!(gradient.stops[1].color, ColorRef::Theme("attr/mid".to_string()));
    assert_eq!(gradient.stops[2].offset, 1.0);
}

#[test]
fn parse_gradient_2() {
    // without items the start/end colors describe the ramp
    let doc = Document::from_str(
        "<vector android:viewportWidth='24' android:viewportHeight='24'>
            <path android:pathData='M 0 0'>
                <gradient android:type='radial'
                          android:centerX='12' android:centerY='12'
                          android:gradientRadius='12'
                          android:startColor='#ffffff' android:endColor='#000000'/>
            </path>
        </vector>").unwrap();

    let path = match doc.children()[0] {
        Element::Path(ref p) => p,
        _ => panic!("expected a path"),
    };

    let gradient = path.gradient.as_ref().unwrap();
    assert_eq!(gradient.kind, GradientKind::Radial {
        center_x: 12.0, center_y: 12.0, radius: 12.0,
    });
    assert_eq!(gradient.stops.len(), 2);
    assert_eq!(gradient.stops[0].offset, 0.0);
    assert_eq!(gradient.stops[1].offset, 1.0);
}

#[test]
fn parse_unknown_1() {
    // unknown elements are skipped with their whole subtree,
    // unknown attributes one by one
    let doc = Document::from_str(
        "<vector android:viewportWidth='24' android:viewportHeight='24'
                 android:tint='#ff0000'>
            <aapt:attr name='android:fillColor'>
                <unknown><deep/></unknown>
            </aapt:attr>
            <path android:pathData='M 1 1' android:futureFeature='yes'/>
        </vector>").unwrap();

    assert_eq!(doc.children().len(), 1);
    assert!(match doc.children()[0] { Element::Path(_) => true, _ => false });
}

#[test]
fn parse_unknown_2() {
    // the same document fails when skipping is disabled
    let opt = ParseOptions { skip_unknown_elements: false };
    let e = Document::from_str_with_opt(
        "<vector android:viewportWidth='24' android:viewportHeight='24'>
            <rect/>
        </vector>", &opt).unwrap_err();

    assert_eq!(e.kind(), ErrorKind::InvalidHierarchy);
}

#[test]
fn parse_comments_1() {
    let doc = Document::from_str(
        "<?xml version='1.0' encoding='utf-8'?>
        <!-- a comment -->
        <vector android:viewportWidth='24' android:viewportHeight='24'>
            <!-- another one -->
        </vector>").unwrap();

    assert!(doc.children().is_empty());
}

test_err!(parse_err_no_viewport_1,
    "<vector android:width='24dp' android:height='24dp'/>",
    ErrorKind::MissingRequiredAttribute);

test_err!(parse_err_no_viewport_2,
    "<vector android:viewportWidth='24'/>",
    ErrorKind::MissingRequiredAttribute);

test_err!(parse_err_zero_viewport_1,
    "<vector android:viewportWidth='0' android:viewportHeight='24'/>",
    ErrorKind::MalformedNumber);

test_err!(parse_err_gradient_top_level_1,
    "<vector android:viewportWidth='24' android:viewportHeight='24'>
        <gradient/>
        <path android:pathData='M 0 0'/>
    </vector>",
    ErrorKind::InvalidHierarchy);

test_err!(parse_err_item_outside_gradient_1,
    "<vector android:viewportWidth='24' android:viewportHeight='24'>
        <item android:offset='0' android:color='#fff'/>
    </vector>",
    ErrorKind::InvalidHierarchy);

test_err!(parse_err_nested_vector_1,
    "<vector android:viewportWidth='24' android:viewportHeight='24'>
        <vector android:viewportWidth='24' android:viewportHeight='24'/>
    </vector>",
    ErrorKind::InvalidHierarchy);

test_err!(parse_err_root_not_vector_1,
    "<path android:pathData='M 0 0'/>",
    ErrorKind::InvalidHierarchy);

test_err!(parse_err_two_roots_1,
    "<vector android:viewportWidth='24' android:viewportHeight='24'/>
     <vector android:viewportWidth='24' android:viewportHeight='24'/>",
    ErrorKind::InvalidHierarchy);

test_err!(parse_err_no_path_data_1,
    "<vector android:viewportWidth='24' android:viewportHeight='24'>
        <path android:name='p'/>
    </vector>",
    ErrorKind::MissingRequiredAttribute);

test_err!(parse_err_no_radius_1,
    "<vector android:viewportWidth='24' android:viewportHeight='24'>
        <path android:pathData='M 0 0'>
            <gradient android:type='radial'/>
        </path>
    </vector>",
    ErrorKind::MissingRequiredAttribute);

test_err!(parse_err_item_no_color_1,
    "<vector android:viewportWidth='24' android:viewportHeight='24'>
        <path android:pathData='M 0 0'>
            <gradient><item android:offset='0'/></gradient>
        </path>
    </vector>",
    ErrorKind::MissingRequiredAttribute);

test_err!(parse_err_two_gradients_1,
    "<vector android:viewportWidth='24' android:viewportHeight='24'>
        <path android:pathData='M 0 0'>
            <gradient/>
            <gradient/>
        </path>
    </vector>",
    ErrorKind::InvalidHierarchy);

test_err!(parse_err_bad_enum_1,
    "<vector android:viewportWidth='24' android:viewportHeight='24'>
        <path android:pathData='M 0 0' android:fillType='winding'/>
    </vector>",
    ErrorKind::UnknownEnumValue);

test_err!(parse_err_bad_number_1,
    "<vector android:viewportWidth='24' android:viewportHeight='twenty'/>",
    ErrorKind::MalformedNumber);

test_err!(parse_err_mismatched_close_1,
    "<vector android:viewportWidth='24' android:viewportHeight='24'>
        <group></path>
    </vector>",
    ErrorKind::InvalidHierarchy);

test_err!(parse_err_truncated_1,
    "<vector android:viewportWidth='24' android:viewportHeight='24'>",
    ErrorKind::UnexpectedEndOfInput);

test_err!(parse_err_empty_1, "", ErrorKind::UnexpectedEndOfInput);

test_err!(parse_err_empty_2, "<!-- only a comment -->", ErrorKind::UnexpectedEndOfInput);

#[test]
fn parse_err_path_data_offset_1() {
    // a path data error is reported at its offset in the document
    let text = "<vector android:viewportWidth='24' android:viewportHeight='24'>\
                <path android:pathData='M 0 0 X'/></vector>";
    let e = Document::from_str(text).unwrap_err();

    assert_eq!(e.kind(), ErrorKind::UnknownCommand);
    assert_eq!(&text[e.pos()..e.pos() + 1], "X");
}

#[test]
fn parse_err_close_without_subpath_1() {
    let text = "<vector android:viewportWidth='24' android:viewportHeight='24'>\
                <path android:pathData='L 1 1 Z'/></vector>";
    let e = Document::from_str(text).unwrap_err();

    assert_eq!(e.kind(), ErrorKind::CloseWithoutSubpath);
    assert_eq!(&text[e.pos()..e.pos() + 1], "Z");
}

#[test]
fn parse_from_data_1() {
    let doc = Document::from_data(
        b"<vector android:viewportWidth='24' android:viewportHeight='24'/>").unwrap();
    assert_eq!(doc.viewport_width(), 24.0);
}

#[test]
fn parse_from_data_err_1() {
    let e = Document::from_data(b"<vector \xff/>").unwrap_err();
    assert_eq!(e.kind(), ErrorKind::InvalidByteSequence);
    assert_eq!(e.pos(), 8);
}

#[test]
fn parse_empty_path_data_1() {
    // empty path data is valid and draws nothing
    let doc = Document::from_str(
        "<vector android:viewportWidth='24' android:viewportHeight='24'>
            <path android:pathData=''/>
        </vector>").unwrap();

    match doc.children()[0] {
        Element::Path(ref p) => assert!(p.data.is_empty()),
        _ => panic!("expected a path"),
    }
}
