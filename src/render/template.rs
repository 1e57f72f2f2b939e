//! The parametrized template renderer.
//!
//! One algorithm over a per-variant style table: frame decor, title line,
//! secondary heading, introductory phrase, recipient name, body sentence,
//! issue date, organization and signature placeholders. The renderer only
//! appends to the caller's sink; re-invocation against a cleared sink yields
//! a structurally identical sequence.

use crate::merge::EffectiveDescriptor;
use crate::render::paint::{DrawCommand, DrawSink, Stroke, TextAlign};
use crate::render::style::{style_for, FrameElement, Paint, Role, StyleTable};
use crate::CertificateRecord;

fn resolve(role: Role, desc: &EffectiveDescriptor) -> String {
    match role {
        Role::Primary => desc.primary_color.clone(),
        Role::Secondary => desc.secondary_color.clone(),
        Role::Accent => desc.accent_color.clone(),
        Role::Text => desc.text_color.clone(),
    }
}

fn resolve_paint(paint: Paint, desc: &EffectiveDescriptor) -> String {
    match paint {
        Paint::Role(role) => resolve(role, desc),
        Paint::Fixed(color) => color.to_string(),
    }
}

fn push_frame(element: &FrameElement, desc: &EffectiveDescriptor, sink: &mut dyn DrawSink) {
    match *element {
        FrameElement::Rect {
            x,
            y,
            width,
            height,
            fill,
            stroke,
            dash,
            corner_radius,
            opacity,
        } => sink.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            fill: fill.map(|role| resolve(role, desc)),
            stroke: stroke.map(|(role, w)| Stroke {
                color: resolve(role, desc),
                width: w,
                dash,
            }),
            corner_radius,
            opacity,
        }),
        FrameElement::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            width,
        } => sink.push(DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            color: resolve(color, desc),
            width,
        }),
        FrameElement::Circle {
            cx,
            cy,
            radius,
            fill,
            opacity,
        } => sink.push(DrawCommand::Circle {
            cx,
            cy,
            radius,
            fill: resolve(fill, desc),
            opacity,
        }),
        FrameElement::Ellipse {
            cx,
            cy,
            rx,
            ry,
            fill,
            opacity,
        } => sink.push(DrawCommand::Ellipse {
            cx,
            cy,
            rx,
            ry,
            fill: resolve(fill, desc),
            opacity,
        }),
        FrameElement::Label {
            x,
            y,
            text,
            size,
            color,
        } => sink.push(DrawCommand::Text {
            x,
            y,
            content: text.to_string(),
            size,
            font: "Arial".to_string(),
            color: resolve(color, desc),
            align: TextAlign::Center,
            italic: false,
        }),
    }
}

/// Title line content: derived title when present, else the category name;
/// upper-cased only where the style table says so.
fn title_text(style: &StyleTable, desc: &EffectiveDescriptor, record: &CertificateRecord) -> String {
    let text = desc
        .ai_title
        .as_deref()
        .unwrap_or(&record.category_name);
    if style.title.uppercase {
        text.to_uppercase()
    } else {
        text.to_string()
    }
}

fn heading_text(style: &StyleTable, desc: &EffectiveDescriptor) -> String {
    let text = desc
        .ai_decorative
        .as_deref()
        .unwrap_or(style.heading.default_text);
    if style.heading.uppercase {
        text.to_uppercase()
    } else {
        text.to_string()
    }
}

fn body_text(style: &StyleTable, desc: &EffectiveDescriptor, record: &CertificateRecord) -> String {
    match &desc.ai_description {
        Some(description) => description.clone(),
        None => style
            .body
            .template
            .replace("{category}", &record.category_name),
    }
}

/// Emit the full ordered instruction sequence for one variant.
pub fn render(desc: &EffectiveDescriptor, record: &CertificateRecord, sink: &mut dyn DrawSink) {
    let style = style_for(desc.variant);

    for element in style.frame {
        push_frame(element, desc, sink);
    }

    sink.push(DrawCommand::Text {
        x: 400,
        y: style.title.y,
        content: title_text(style, desc, record),
        size: style.title.size,
        font: style.title.font.to_string(),
        color: resolve_paint(style.title.color, desc),
        align: TextAlign::Center,
        italic: false,
    });

    sink.push(DrawCommand::Text {
        x: 400,
        y: style.heading.y,
        content: heading_text(style, desc),
        size: style.heading.size,
        font: style.heading.font.to_string(),
        color: resolve(Role::Secondary, desc),
        align: TextAlign::Center,
        italic: style.heading.italic,
    });

    sink.push(DrawCommand::Text {
        x: 400,
        y: style.intro.y,
        content: style.intro.text.to_string(),
        size: style.intro.size,
        font: style.intro.font.to_string(),
        color: resolve(Role::Text, desc),
        align: TextAlign::Center,
        italic: style.intro.italic,
    });

    sink.push(DrawCommand::Text {
        x: 400,
        y: style.name.y,
        content: record.recipient_name.clone(),
        size: style.name.size,
        font: style.name.font.to_string(),
        color: resolve(Role::Primary, desc),
        align: TextAlign::Center,
        italic: style.name.italic,
    });

    sink.push(DrawCommand::Text {
        x: 400,
        y: style.body.y,
        content: body_text(style, desc, record),
        size: style.body.size,
        font: style.body.font.to_string(),
        color: resolve(Role::Text, desc),
        align: TextAlign::Center,
        italic: false,
    });

    sink.push(DrawCommand::Text {
        x: style.date.x,
        y: style.date.y,
        content: format!("{}{}", style.date.prefix, record.formatted_date()),
        size: style.date.size,
        font: style.body_font.to_string(),
        color: resolve(Role::Text, desc),
        align: style.date.align,
        italic: style.date.italic,
    });

    sink.push(DrawCommand::Text {
        x: style.org.x,
        y: style.org.y,
        content: record.organization_name.clone(),
        size: style.org.size,
        font: style.body_font.to_string(),
        color: resolve(style.org.color, desc),
        align: style.org.align,
        italic: false,
    });

    for signature in style.signatures {
        if let Some((x1, y1, x2, y2)) = signature.line {
            sink.push(DrawCommand::Line {
                x1,
                y1,
                x2,
                y2,
                color: resolve(Role::Text, desc),
                width: 1,
            });
        }
        sink.push(DrawCommand::Text {
            x: signature.label_x,
            y: signature.label_y,
            content: signature.label.to_string(),
            size: signature.size,
            font: style.body_font.to_string(),
            color: resolve(Role::Text, desc),
            align: TextAlign::Center,
            italic: signature.italic,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{catalog, Variant};
    use crate::merge::merge;
    use crate::RawInput;

    fn record() -> CertificateRecord {
        let (record, _) = CertificateRecord::from_input(RawInput {
            category_name: "Python Mastery".into(),
            recipient_name: "Jane Doe".into(),
            organization_name: "Acme Academy".into(),
            date_issued: Some("2024-01-15".into()),
            api_key: String::new(),
        });
        record
    }

    fn texts(commands: &[DrawCommand]) -> Vec<&str> {
        commands.iter().filter_map(|c| c.text_content()).collect()
    }

    #[test]
    fn modern_defaults_uppercase_the_title() {
        let designs = catalog();
        let record = record();
        let merged = merge(&designs, None, &record);
        let modern = merged
            .iter()
            .find(|d| d.variant == Variant::Modern)
            .unwrap();

        let mut sink: Vec<DrawCommand> = Vec::new();
        render(modern, &record, &mut sink);
        let texts = texts(&sink);
        assert!(texts.contains(&"PYTHON MASTERY"));
        assert!(texts.contains(&"CERTIFICATE OF ACHIEVEMENT"));
        assert!(texts.contains(&"has successfully completed the Python Mastery"));
        assert!(texts.contains(&"Jane Doe"));
        assert!(texts.contains(&"Date: January 15, 2024"));
        assert!(texts.contains(&"Acme Academy"));
        assert!(texts.contains(&"Director"));
        assert!(texts.contains(&"Instructor"));
    }

    #[test]
    fn classic_keeps_title_casing() {
        let designs = catalog();
        let record = record();
        let merged = merge(&designs, None, &record);
        let classic = merged
            .iter()
            .find(|d| d.variant == Variant::Classic)
            .unwrap();

        let mut sink: Vec<DrawCommand> = Vec::new();
        render(classic, &record, &mut sink);
        let texts = texts(&sink);
        assert!(texts.contains(&"Python Mastery"));
        assert!(texts.contains(&"For outstanding achievement in\nPython Mastery"));
        assert!(texts.contains(&"Given this January 15, 2024"));
    }

    #[test]
    fn render_is_deterministic() {
        let designs = catalog();
        let record = record();
        let merged = merge(&designs, None, &record);
        for desc in &merged {
            let mut first: Vec<DrawCommand> = Vec::new();
            render(desc, &record, &mut first);
            let mut second: Vec<DrawCommand> = Vec::new();
            render(desc, &record, &mut second);
            assert_eq!(first, second);
            assert!(!first.is_empty());
        }
    }

    #[test]
    fn frame_precedes_all_text_fields() {
        let designs = catalog();
        let record = record();
        let merged = merge(&designs, None, &record);
        let modern = &merged[0];
        let mut sink: Vec<DrawCommand> = Vec::new();
        render(modern, &record, &mut sink);

        // First command is part of the decorative frame, the title follows
        // all frame elements.
        assert!(matches!(sink[0], DrawCommand::Rect { .. }));
        let title_pos = sink
            .iter()
            .position(|c| c.text_content() == Some("PYTHON MASTERY"))
            .unwrap();
        let style = style_for(Variant::Modern);
        assert_eq!(title_pos, style.frame.len());
    }
}
