//! Per-variant style tables.
//!
//! Every visual difference between the five templates lives here as data:
//! geometry constants, typography, canned fallback phrases, frame decor and
//! footer layout. The renderer in `template` is a single algorithm over one
//! of these tables.

use crate::catalog::Variant;
use crate::render::paint::TextAlign;

/// Palette role resolved against an effective descriptor at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Primary,
    Secondary,
    Accent,
    Text,
}

/// A color reference: either a palette role or a fixed literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Role(Role),
    Fixed(&'static str),
}

/// One decorative frame element, drawn before any text.
#[derive(Debug, Clone, Copy)]
pub enum FrameElement {
    Rect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        fill: Option<Role>,
        stroke: Option<(Role, u32)>,
        dash: Option<(u32, u32)>,
        corner_radius: u32,
        opacity: f32,
    },
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Role,
        width: u32,
    },
    Circle {
        cx: i32,
        cy: i32,
        radius: u32,
        fill: Role,
        opacity: f32,
    },
    Ellipse {
        cx: i32,
        cy: i32,
        rx: u32,
        ry: u32,
        fill: Role,
        opacity: f32,
    },
    /// Small decorative glyph runs (flourishes, stars, waves, badges).
    Label {
        x: i32,
        y: i32,
        text: &'static str,
        size: u32,
        color: Role,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct TitleSpec {
    pub y: i32,
    pub size: u32,
    pub font: &'static str,
    pub color: Paint,
    pub uppercase: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct HeadingSpec {
    pub y: i32,
    pub size: u32,
    pub font: &'static str,
    pub default_text: &'static str,
    pub uppercase: bool,
    pub italic: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct IntroSpec {
    pub y: i32,
    pub size: u32,
    pub font: &'static str,
    pub text: &'static str,
    pub italic: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct NameSpec {
    pub y: i32,
    pub size: u32,
    pub font: &'static str,
    pub italic: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct BodySpec {
    pub y: i32,
    pub size: u32,
    pub font: &'static str,
    /// Canned fallback sentence; `{category}` is substituted.
    pub template: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct DateSpec {
    pub x: i32,
    pub y: i32,
    pub size: u32,
    pub prefix: &'static str,
    pub align: TextAlign,
    pub italic: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct OrgSpec {
    pub x: i32,
    pub y: i32,
    pub size: u32,
    pub color: Role,
    pub align: TextAlign,
}

#[derive(Debug, Clone, Copy)]
pub struct SignatureSpec {
    /// Signature rule line; creative uses a decorative wave instead.
    pub line: Option<(i32, i32, i32, i32)>,
    pub label: &'static str,
    pub label_x: i32,
    pub label_y: i32,
    pub size: u32,
    pub italic: bool,
}

/// Complete style table for one variant.
#[derive(Debug, Clone, Copy)]
pub struct StyleTable {
    pub variant: Variant,
    pub body_font: &'static str,
    pub frame: &'static [FrameElement],
    pub title: TitleSpec,
    pub heading: HeadingSpec,
    pub intro: IntroSpec,
    pub name: NameSpec,
    pub body: BodySpec,
    pub date: DateSpec,
    pub org: OrgSpec,
    pub signatures: &'static [SignatureSpec],
}

const MODERN_FRAME: &[FrameElement] = &[
    FrameElement::Rect {
        x: 20,
        y: 20,
        width: 760,
        height: 560,
        fill: None,
        stroke: Some((Role::Primary, 4)),
        dash: None,
        corner_radius: 10,
        opacity: 1.0,
    },
    FrameElement::Rect {
        x: 50,
        y: 50,
        width: 100,
        height: 6,
        fill: Some(Role::Accent),
        stroke: None,
        dash: None,
        corner_radius: 0,
        opacity: 1.0,
    },
    FrameElement::Rect {
        x: 650,
        y: 544,
        width: 100,
        height: 6,
        fill: Some(Role::Accent),
        stroke: None,
        dash: None,
        corner_radius: 0,
        opacity: 1.0,
    },
    // Underline beneath the recipient name
    FrameElement::Line {
        x1: 300,
        y1: 340,
        x2: 500,
        y2: 340,
        color: Role::Primary,
        width: 2,
    },
];

const MODERN: StyleTable = StyleTable {
    variant: Variant::Modern,
    body_font: "Arial",
    frame: MODERN_FRAME,
    title: TitleSpec {
        y: 120,
        size: 32,
        font: "Arial Black",
        color: Paint::Role(Role::Primary),
        uppercase: true,
    },
    heading: HeadingSpec {
        y: 180,
        size: 18,
        font: "Arial",
        default_text: "Certificate of Achievement",
        uppercase: true,
        italic: false,
    },
    intro: IntroSpec {
        y: 250,
        size: 16,
        font: "Arial",
        text: "This is to certify that",
        italic: false,
    },
    name: NameSpec {
        y: 290,
        size: 28,
        font: "Arial Black",
        italic: false,
    },
    body: BodySpec {
        y: 380,
        size: 16,
        font: "Arial",
        template: "has successfully completed the {category}",
    },
    date: DateSpec {
        x: 150,
        y: 480,
        size: 14,
        prefix: "Date: ",
        align: TextAlign::Left,
        italic: false,
    },
    org: OrgSpec {
        x: 550,
        y: 480,
        size: 14,
        color: Role::Text,
        align: TextAlign::Right,
    },
    signatures: &[
        SignatureSpec {
            line: Some((120, 520, 220, 520)),
            label: "Director",
            label_x: 170,
            label_y: 530,
            size: 12,
            italic: false,
        },
        SignatureSpec {
            line: Some((580, 520, 680, 520)),
            label: "Instructor",
            label_x: 630,
            label_y: 530,
            size: 12,
            italic: false,
        },
    ],
};

const CLASSIC_FRAME: &[FrameElement] = &[
    FrameElement::Rect {
        x: 10,
        y: 10,
        width: 780,
        height: 580,
        fill: None,
        stroke: Some((Role::Primary, 6)),
        dash: None,
        corner_radius: 0,
        opacity: 1.0,
    },
    FrameElement::Rect {
        x: 30,
        y: 30,
        width: 740,
        height: 540,
        fill: None,
        stroke: Some((Role::Accent, 2)),
        dash: None,
        corner_radius: 0,
        opacity: 1.0,
    },
    FrameElement::Circle {
        cx: 30,
        cy: 30,
        radius: 15,
        fill: Role::Accent,
        opacity: 1.0,
    },
    FrameElement::Circle {
        cx: 750,
        cy: 30,
        radius: 15,
        fill: Role::Accent,
        opacity: 1.0,
    },
    FrameElement::Circle {
        cx: 30,
        cy: 550,
        radius: 15,
        fill: Role::Accent,
        opacity: 1.0,
    },
    FrameElement::Circle {
        cx: 750,
        cy: 550,
        radius: 15,
        fill: Role::Accent,
        opacity: 1.0,
    },
    FrameElement::Label {
        x: 400,
        y: 140,
        text: "\u{2766} \u{2766} \u{2766}",
        size: 20,
        color: Role::Accent,
    },
    FrameElement::Label {
        x: 320,
        y: 320,
        text: "\u{3030}",
        size: 20,
        color: Role::Accent,
    },
    FrameElement::Label {
        x: 480,
        y: 320,
        text: "\u{3030}",
        size: 20,
        color: Role::Accent,
    },
];

const CLASSIC: StyleTable = StyleTable {
    variant: Variant::Classic,
    body_font: "Times New Roman",
    frame: CLASSIC_FRAME,
    title: TitleSpec {
        y: 100,
        size: 28,
        font: "Times New Roman",
        color: Paint::Role(Role::Primary),
        uppercase: false,
    },
    heading: HeadingSpec {
        y: 180,
        size: 16,
        font: "Times New Roman",
        default_text: "Certificate of Excellence",
        uppercase: true,
        italic: false,
    },
    intro: IntroSpec {
        y: 230,
        size: 14,
        font: "Times New Roman",
        text: "This is hereby presented to",
        italic: true,
    },
    name: NameSpec {
        y: 280,
        size: 32,
        font: "Times New Roman",
        italic: false,
    },
    body: BodySpec {
        y: 370,
        size: 16,
        font: "Times New Roman",
        template: "For outstanding achievement in\n{category}",
    },
    date: DateSpec {
        x: 400,
        y: 450,
        size: 14,
        prefix: "Given this ",
        align: TextAlign::Center,
        italic: true,
    },
    org: OrgSpec {
        x: 400,
        y: 500,
        size: 18,
        color: Role::Primary,
        align: TextAlign::Center,
    },
    signatures: &[
        SignatureSpec {
            line: Some((140, 530, 260, 530)),
            label: "Director",
            label_x: 200,
            label_y: 540,
            size: 12,
            italic: false,
        },
        SignatureSpec {
            line: Some((540, 530, 660, 530)),
            label: "Instructor",
            label_x: 600,
            label_y: 540,
            size: 12,
            italic: false,
        },
    ],
};

const ELEGANT_FRAME: &[FrameElement] = &[
    // Header wash approximating the original's vertical gradient
    FrameElement::Rect {
        x: 0,
        y: 0,
        width: 800,
        height: 200,
        fill: Some(Role::Primary),
        stroke: None,
        dash: None,
        corner_radius: 0,
        opacity: 0.3,
    },
    FrameElement::Rect {
        x: 40,
        y: 40,
        width: 720,
        height: 520,
        fill: None,
        stroke: Some((Role::Accent, 2)),
        dash: Some((5, 5)),
        corner_radius: 0,
        opacity: 1.0,
    },
    FrameElement::Line {
        x1: 300,
        y1: 130,
        x2: 500,
        y2: 130,
        color: Role::Accent,
        width: 3,
    },
    // Framed box behind the organization name
    FrameElement::Rect {
        x: 300,
        y: 470,
        width: 200,
        height: 40,
        fill: None,
        stroke: Some((Role::Accent, 1)),
        dash: None,
        corner_radius: 5,
        opacity: 1.0,
    },
];

const ELEGANT: StyleTable = StyleTable {
    variant: Variant::Elegant,
    body_font: "Georgia",
    frame: ELEGANT_FRAME,
    title: TitleSpec {
        y: 80,
        size: 26,
        font: "Georgia",
        color: Paint::Fixed("#ffffff"),
        uppercase: false,
    },
    heading: HeadingSpec {
        y: 160,
        size: 18,
        font: "Georgia",
        default_text: "Certificate of Achievement",
        uppercase: false,
        italic: true,
    },
    intro: IntroSpec {
        y: 220,
        size: 16,
        font: "Georgia",
        text: "is hereby awarded to",
        italic: false,
    },
    name: NameSpec {
        y: 270,
        size: 34,
        font: "Georgia",
        italic: true,
    },
    body: BodySpec {
        y: 340,
        size: 16,
        font: "Georgia",
        template: "for exceptional performance and dedication\nin {category}",
    },
    date: DateSpec {
        x: 400,
        y: 420,
        size: 14,
        prefix: "Awarded on ",
        align: TextAlign::Center,
        italic: true,
    },
    org: OrgSpec {
        x: 400,
        y: 490,
        size: 16,
        color: Role::Primary,
        align: TextAlign::Center,
    },
    signatures: &[
        SignatureSpec {
            line: Some((140, 530, 240, 530)),
            label: "Director",
            label_x: 190,
            label_y: 540,
            size: 12,
            italic: false,
        },
        SignatureSpec {
            line: Some((560, 530, 660, 530)),
            label: "Instructor",
            label_x: 610,
            label_y: 540,
            size: 12,
            italic: false,
        },
    ],
};

const TECH_FRAME: &[FrameElement] = &[
    FrameElement::Rect {
        x: 0,
        y: 0,
        width: 800,
        height: 100,
        fill: Some(Role::Primary),
        stroke: None,
        dash: None,
        corner_radius: 0,
        opacity: 0.1,
    },
    FrameElement::Rect {
        x: 0,
        y: 500,
        width: 800,
        height: 100,
        fill: Some(Role::Primary),
        stroke: None,
        dash: None,
        corner_radius: 0,
        opacity: 0.1,
    },
    FrameElement::Rect {
        x: 30,
        y: 30,
        width: 740,
        height: 540,
        fill: None,
        stroke: Some((Role::Accent, 3)),
        dash: Some((10, 5)),
        corner_radius: 0,
        opacity: 1.0,
    },
    FrameElement::Rect {
        x: 20,
        y: 20,
        width: 20,
        height: 20,
        fill: Some(Role::Accent),
        stroke: None,
        dash: None,
        corner_radius: 0,
        opacity: 1.0,
    },
    FrameElement::Rect {
        x: 760,
        y: 20,
        width: 20,
        height: 20,
        fill: Some(Role::Accent),
        stroke: None,
        dash: None,
        corner_radius: 0,
        opacity: 1.0,
    },
    FrameElement::Rect {
        x: 20,
        y: 560,
        width: 20,
        height: 20,
        fill: Some(Role::Accent),
        stroke: None,
        dash: None,
        corner_radius: 0,
        opacity: 1.0,
    },
    FrameElement::Rect {
        x: 760,
        y: 560,
        width: 20,
        height: 20,
        fill: Some(Role::Accent),
        stroke: None,
        dash: None,
        corner_radius: 0,
        opacity: 1.0,
    },
    FrameElement::Line {
        x1: 100,
        y1: 120,
        x2: 300,
        y2: 120,
        color: Role::Accent,
        width: 2,
    },
    FrameElement::Line {
        x1: 500,
        y1: 120,
        x2: 700,
        y2: 120,
        color: Role::Accent,
        width: 2,
    },
    // Box around the recipient name
    FrameElement::Rect {
        x: 250,
        y: 240,
        width: 300,
        height: 60,
        fill: None,
        stroke: Some((Role::Primary, 2)),
        dash: None,
        corner_radius: 5,
        opacity: 1.0,
    },
    // Footer info panel
    FrameElement::Rect {
        x: 60,
        y: 420,
        width: 680,
        height: 80,
        fill: Some(Role::Accent),
        stroke: None,
        dash: None,
        corner_radius: 10,
        opacity: 0.1,
    },
    FrameElement::Label {
        x: 100,
        y: 440,
        text: "DATE:",
        size: 12,
        color: Role::Secondary,
    },
    FrameElement::Label {
        x: 400,
        y: 440,
        text: "ORGANIZATION:",
        size: 12,
        color: Role::Secondary,
    },
    // QR badge placeholder
    FrameElement::Rect {
        x: 650,
        y: 440,
        width: 50,
        height: 50,
        fill: None,
        stroke: Some((Role::Text, 1)),
        dash: None,
        corner_radius: 0,
        opacity: 1.0,
    },
    FrameElement::Label {
        x: 675,
        y: 465,
        text: "QR",
        size: 12,
        color: Role::Text,
    },
];

const TECH: StyleTable = StyleTable {
    variant: Variant::Tech,
    body_font: "Arial",
    frame: TECH_FRAME,
    title: TitleSpec {
        y: 80,
        size: 24,
        font: "Arial Black",
        color: Paint::Role(Role::Primary),
        uppercase: true,
    },
    heading: HeadingSpec {
        y: 150,
        size: 16,
        font: "Arial",
        default_text: "Digital Certificate",
        uppercase: true,
        italic: false,
    },
    intro: IntroSpec {
        y: 200,
        size: 14,
        font: "Arial",
        text: "This certifies that",
        italic: false,
    },
    name: NameSpec {
        y: 270,
        size: 28,
        font: "Arial Black",
        italic: false,
    },
    body: BodySpec {
        y: 340,
        size: 16,
        font: "Arial",
        template: "Has successfully completed the requirements for\n{category}",
    },
    date: DateSpec {
        x: 100,
        y: 460,
        size: 14,
        prefix: "",
        align: TextAlign::Left,
        italic: false,
    },
    org: OrgSpec {
        x: 400,
        y: 460,
        size: 14,
        color: Role::Text,
        align: TextAlign::Left,
    },
    signatures: &[
        SignatureSpec {
            line: Some((120, 540, 220, 540)),
            label: "Director",
            label_x: 170,
            label_y: 550,
            size: 11,
            italic: false,
        },
        SignatureSpec {
            line: Some((580, 540, 680, 540)),
            label: "Instructor",
            label_x: 630,
            label_y: 550,
            size: 11,
            italic: false,
        },
    ],
};

const CREATIVE_FRAME: &[FrameElement] = &[
    FrameElement::Circle {
        cx: 100,
        cy: 100,
        radius: 80,
        fill: Role::Primary,
        opacity: 0.1,
    },
    FrameElement::Circle {
        cx: 600,
        cy: 400,
        radius: 100,
        fill: Role::Accent,
        opacity: 0.1,
    },
    FrameElement::Rect {
        x: 40,
        y: 40,
        width: 720,
        height: 520,
        fill: None,
        stroke: Some((Role::Primary, 4)),
        dash: None,
        corner_radius: 20,
        opacity: 1.0,
    },
    FrameElement::Label {
        x: 300,
        y: 130,
        text: "\u{2605}",
        size: 20,
        color: Role::Accent,
    },
    FrameElement::Label {
        x: 500,
        y: 130,
        text: "\u{2605}",
        size: 20,
        color: Role::Accent,
    },
    FrameElement::Label {
        x: 400,
        y: 190,
        text: "\u{301c}\u{301c}\u{301c}\u{301c}\u{301c}\u{301c}\u{301c}\u{301c}\u{301c}\u{301c}",
        size: 16,
        color: Role::Accent,
    },
    // Rounded badge behind the recipient name
    FrameElement::Rect {
        x: 200,
        y: 260,
        width: 400,
        height: 60,
        fill: Some(Role::Accent),
        stroke: None,
        dash: None,
        corner_radius: 30,
        opacity: 0.2,
    },
    FrameElement::Ellipse {
        cx: 200,
        cy: 450,
        rx: 80,
        ry: 30,
        fill: Role::Primary,
        opacity: 0.1,
    },
    FrameElement::Ellipse {
        cx: 600,
        cy: 450,
        rx: 100,
        ry: 30,
        fill: Role::Accent,
        opacity: 0.1,
    },
    // Wave standing in for a signature rule
    FrameElement::Label {
        x: 400,
        y: 520,
        text: "\u{301c}\u{301c}\u{301c}\u{301c}\u{301c}",
        size: 14,
        color: Role::Accent,
    },
];

const CREATIVE: StyleTable = StyleTable {
    variant: Variant::Creative,
    body_font: "Arial",
    frame: CREATIVE_FRAME,
    title: TitleSpec {
        y: 90,
        size: 30,
        font: "Impact",
        color: Paint::Role(Role::Primary),
        uppercase: false,
    },
    heading: HeadingSpec {
        y: 160,
        size: 18,
        font: "Arial",
        default_text: "Certificate of Creativity & Excellence",
        uppercase: false,
        italic: true,
    },
    intro: IntroSpec {
        y: 230,
        size: 16,
        font: "Arial",
        text: "Proudly presented to",
        italic: false,
    },
    name: NameSpec {
        y: 290,
        size: 32,
        font: "Impact",
        italic: false,
    },
    body: BodySpec {
        y: 360,
        size: 16,
        font: "Arial",
        template: "For outstanding creativity and innovation\nin {category}",
    },
    date: DateSpec {
        x: 200,
        y: 450,
        size: 14,
        prefix: "",
        align: TextAlign::Center,
        italic: false,
    },
    org: OrgSpec {
        x: 600,
        y: 450,
        size: 16,
        color: Role::Primary,
        align: TextAlign::Center,
    },
    signatures: &[SignatureSpec {
        line: None,
        label: "Authorized Signature",
        label_x: 400,
        label_y: 540,
        size: 12,
        italic: true,
    }],
};

/// Style table lookup for a variant.
pub fn style_for(variant: Variant) -> &'static StyleTable {
    match variant {
        Variant::Modern => &MODERN,
        Variant::Classic => &CLASSIC,
        Variant::Elegant => &ELEGANT,
        Variant::Tech => &TECH,
        Variant::Creative => &CREATIVE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_a_table() {
        for v in Variant::ALL {
            let table = style_for(v);
            assert_eq!(table.variant, v);
            assert!(!table.frame.is_empty());
            assert!(!table.signatures.is_empty());
            assert!(table.body.template.contains("{category}"));
        }
    }

    #[test]
    fn only_modern_and_tech_uppercase_the_title() {
        for v in Variant::ALL {
            let expected = matches!(v, Variant::Modern | Variant::Tech);
            assert_eq!(style_for(v).title.uppercase, expected);
        }
    }
}
