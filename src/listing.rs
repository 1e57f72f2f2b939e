//! Source-listing emission.
//!
//! Serializes an effective descriptor and record into a re-runnable fabric.js
//! program mirroring what the renderer drew, by substituting literal field
//! values into a fixed per-variant skeleton. Pure function of its inputs.

use crate::catalog::Variant;
use crate::merge::EffectiveDescriptor;
use crate::render::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::CertificateRecord;

/// Escape a listing for embedding inside a displayed HTML code block.
pub fn escape_html(unsafe_text: &str) -> String {
    unsafe_text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Slugify a category name: lower-cased, whitespace runs collapsed to one
/// hyphen.
pub fn slugify(category: &str) -> String {
    category
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Derived filename for an exported artifact, e.g.
/// `certificate-python-mastery-design-1.png`.
pub fn export_filename(category: &str, design_index: usize, extension: &str) -> String {
    format!(
        "certificate-{}-design-{}.{}",
        slugify(category),
        design_index + 1,
        extension
    )
}

fn title_expr(variant: Variant) -> &'static str {
    match variant {
        Variant::Modern | Variant::Tech => "certificateData.categoryName.toUpperCase()",
        _ => "certificateData.categoryName",
    }
}

fn title_font(variant: Variant) -> &'static str {
    match variant {
        Variant::Classic | Variant::Elegant => "Times New Roman",
        Variant::Creative => "Impact",
        Variant::Modern | Variant::Tech => "Arial Black",
    }
}

fn body_font(variant: Variant) -> &'static str {
    match variant {
        Variant::Classic | Variant::Elegant => "Georgia",
        _ => "Arial",
    }
}

fn body_phrase(variant: Variant) -> &'static str {
    match variant {
        Variant::Tech => "Has successfully completed the requirements for",
        Variant::Creative => "For outstanding creativity and innovation in",
        _ => "has successfully completed the",
    }
}

/// Produce the textual, re-runnable instruction listing for one variant.
///
/// The output is raw program text; apply [`escape_html`] before embedding it
/// in a displayed code block.
pub fn listing(desc: &EffectiveDescriptor, record: &CertificateRecord) -> String {
    let variant = desc.variant;
    let index = variant.index();
    let type_name = {
        let tag = variant.as_str();
        let mut chars = tag.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    };

    format!(
        "// Certificate Design {design_number}: {display_name}\n\
         // Canvas implementation using Fabric.js\n\
         \n\
         // Initialize canvas\n\
         const canvas = new fabric.Canvas('certificate-canvas-{index}', {{\n\
         \x20   width: {canvas_width},\n\
         \x20   height: {canvas_height},\n\
         \x20   backgroundColor: '{background}'\n\
         }});\n\
         \n\
         // Certificate data\n\
         const certificateData = {{\n\
         \x20   categoryName: '{category}',\n\
         \x20   recipientName: '{recipient}',\n\
         \x20   organizationName: '{organization}',\n\
         \x20   dateIssued: '{date}'\n\
         }};\n\
         \n\
         // Design colors\n\
         const colors = {{\n\
         \x20   primary: '{primary}',\n\
         \x20   secondary: '{secondary}',\n\
         \x20   accent: '{accent}',\n\
         \x20   text: '{text}'\n\
         }};\n\
         \n\
         // Create {tag} certificate design\n\
         async function create{type_name}Certificate() {{\n\
         \x20   // Add border\n\
         \x20   const border = new fabric.Rect({{\n\
         \x20       left: 40, top: 40, width: 720, height: 520,\n\
         \x20       fill: 'transparent', stroke: colors.primary, strokeWidth: 3\n\
         \x20   }});\n\
         \x20   canvas.add(border);\n\
         \n\
         \x20   // Add title\n\
         \x20   const title = new fabric.Text({title_expr}, {{\n\
         \x20       left: 400, top: {title_y}, fontSize: {title_size},\n\
         \x20       fontFamily: '{title_font}', fill: colors.primary,\n\
         \x20       textAlign: 'center', originX: 'center', fontWeight: 'bold'\n\
         \x20   }});\n\
         \x20   canvas.add(title);\n\
         \n\
         \x20   // Add recipient name\n\
         \x20   const recipientName = new fabric.Text(certificateData.recipientName, {{\n\
         \x20       left: 400, top: {name_y}, fontSize: {name_size},\n\
         \x20       fontFamily: '{title_font}', fill: colors.primary,\n\
         \x20       textAlign: 'center', originX: 'center', originY: 'center',\n\
         \x20       fontWeight: 'bold'\n\
         \x20   }});\n\
         \x20   canvas.add(recipientName);\n\
         \n\
         \x20   // Add description text\n\
         \x20   const description = new fabric.Text(\n\
         \x20       `{body_phrase}\\n${{certificateData.categoryName}}`, {{\n\
         \x20       left: 400, top: {body_y}, fontSize: 16,\n\
         \x20       fontFamily: '{body_font}', fill: colors.text,\n\
         \x20       textAlign: 'center', originX: 'center'\n\
         \x20   }});\n\
         \x20   canvas.add(description);\n\
         \n\
         \x20   // Add date and organization\n\
         \x20   const dateText = new fabric.Text(`Date: ${{certificateData.dateIssued}}`, {{\n\
         \x20       left: {date_x}, top: {date_y}, fontSize: 14,\n\
         \x20       fontFamily: '{body_font}', fill: colors.text\n\
         \x20   }});\n\
         \x20   canvas.add(dateText);\n\
         \n\
         \x20   const orgText = new fabric.Text(certificateData.organizationName, {{\n\
         \x20       left: {org_x}, top: {org_y}, fontSize: {org_size},\n\
         \x20       fontFamily: '{body_font}', fill: colors.primary,\n\
         \x20       textAlign: 'center', originX: 'center'\n\
         \x20   }});\n\
         \x20   canvas.add(orgText);\n\
         \n\
         \x20   // Render the canvas\n\
         \x20   canvas.renderAll();\n\
         }}\n\
         \n\
         // Initialize the certificate\n\
         create{type_name}Certificate();\n\
         \n\
         // Export helper\n\
         function downloadCertificateAsPNG() {{\n\
         \x20   const link = document.createElement('a');\n\
         \x20   link.download = '{png_name}';\n\
         \x20   link.href = canvas.toDataURL('image/png');\n\
         \x20   link.click();\n\
         }}\n",
        design_number = index + 1,
        display_name = desc.display_name,
        index = index,
        canvas_width = CANVAS_WIDTH,
        canvas_height = CANVAS_HEIGHT,
        background = desc.background_color,
        category = record.category_name,
        recipient = record.recipient_name,
        organization = record.organization_name,
        date = record.date_issued.format("%Y-%m-%d"),
        primary = desc.primary_color,
        secondary = desc.secondary_color,
        accent = desc.accent_color,
        text = desc.text_color,
        tag = variant.as_str(),
        type_name = type_name,
        title_expr = title_expr(variant),
        title_y = if variant == Variant::Classic { 100 } else { 90 },
        title_size = match variant {
            Variant::Creative => 30,
            Variant::Tech => 24,
            _ => 28,
        },
        title_font = title_font(variant),
        name_y = match variant {
            Variant::Classic => 280,
            Variant::Creative => 290,
            _ => 270,
        },
        name_size = match variant {
            Variant::Creative => 32,
            Variant::Elegant => 34,
            Variant::Tech => 28,
            _ => 36,
        },
        body_phrase = body_phrase(variant),
        body_y = match variant {
            Variant::Classic => 370,
            Variant::Creative => 360,
            Variant::Modern => 380,
            _ => 340,
        },
        body_font = body_font(variant),
        date_x = match variant {
            Variant::Tech => 100,
            Variant::Creative => 200,
            _ => 150,
        },
        date_y = match variant {
            Variant::Classic => 450,
            Variant::Elegant => 420,
            Variant::Tech => 460,
            Variant::Creative => 450,
            Variant::Modern => 480,
        },
        org_x = match variant {
            Variant::Tech | Variant::Elegant => 400,
            Variant::Creative => 600,
            _ => 550,
        },
        org_y = match variant {
            Variant::Classic => 500,
            Variant::Elegant => 490,
            Variant::Tech => 460,
            Variant::Creative => 450,
            Variant::Modern => 480,
        },
        org_size = match variant {
            Variant::Classic => 18,
            Variant::Creative | Variant::Elegant => 16,
            _ => 14,
        },
        png_name = export_filename(&record.category_name, index, "png"),
    )
}
