//! LXFML document reader and writer.
//!
//! The reader only extracts what the decoder needs from each `<Brick>`: the
//! first comma-separated token of `Part@materials` and components 9 and 10
//! (x, y) of the 12-float `Bone@transformation`. Everything else in the
//! document (cameras, groups, build instructions) is ignored.
//!
//! The writer is deliberately not an XML serializer: the output is a fixed
//! header, one pre-rendered text block per placement, and a fixed footer,
//! concatenated. The boilerplate is byte-identical to the reference output
//! so round trips through other tooling stay stable.

use std::io::{self, Write};

use brick_mosaic::{Palette, Placement};

use crate::error::DocumentError;

/// Fixed document preamble: LXFML 5.0, LDD application metadata, and the
/// reference camera. Only the `<Bricks>` content varies between documents.
const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no" ?>
<LXFML versionMajor="5" versionMinor="0" name="Name">
<Meta>
<Application name="LEGO Digital Designer" versionMajor="4" versionMinor="3"/>
<Brand name="LDD"/>
<BrickSet version="835.4"/>
</Meta>
<Cameras>
<Camera refID="1" fieldOfView="80" distance="82.5515899658203125" transformation="0.06752951443195343,0,-0.9977173209190369,-0.30479493737220764,0.9521945714950562,-0.020629746839404106,0.9500210285186768,0.30549225211143494,0.06430123746395111,66.0257339477539,25.787870407104492,17.708168029785156"/>
</Cameras>
<Bricks cameraRef="1">"#;

/// Fixed document epilogue closing `<Bricks>` and stubbing out the group
/// and instruction sections.
const FOOTER: &str = r#"</Bricks>
<GroupSystems>
<GroupSystem>
</GroupSystem>
</GroupSystems>
<BuildingInstructions>
</BuildingInstructions>
</LXFML>"#;

/// All bricks are 1x1 plates; the design id never varies.
const DESIGN_ID: &str = "3005";

/// Parse an LXFML document into placement records, in document order.
///
/// `ref_id` is assigned sequentially from 0 (document order); the reader
/// does not trust the document's own refID attributes.
///
/// # Errors
///
/// [`DocumentError`] if the XML is malformed, expected elements or
/// attributes are missing, or numeric attributes fail to parse. Unknown
/// material ids are not an error here; the decoder defaults them to black.
pub fn parse(text: &str) -> Result<Vec<Placement>, DocumentError> {
    let doc = roxmltree::Document::parse(text)?;
    let bricks = doc
        .root_element()
        .children()
        .find(|n| n.has_tag_name("Bricks"))
        .ok_or(DocumentError::MissingElement("Bricks"))?;

    let mut placements = Vec::new();
    let mut ref_id = 0u32;
    for brick in bricks.children().filter(|n| n.has_tag_name("Brick")) {
        let part = brick
            .children()
            .find(|n| n.has_tag_name("Part"))
            .ok_or(DocumentError::MissingElement("Part"))?;
        let materials = part
            .attribute("materials")
            .ok_or(DocumentError::MissingAttribute {
                element: "Part",
                attribute: "materials",
            })?;
        let material_token = match materials.split_once(',') {
            Some((first, _)) => first,
            None => materials,
        };
        let material: u32 = material_token
            .trim()
            .parse()
            .map_err(|_| DocumentError::BadNumber {
                what: "material id",
                value: material_token.to_string(),
            })?;

        let bone = part
            .children()
            .find(|n| n.has_tag_name("Bone"))
            .ok_or(DocumentError::MissingElement("Bone"))?;
        let transformation = bone
            .attribute("transformation")
            .ok_or(DocumentError::MissingAttribute {
                element: "Bone",
                attribute: "transformation",
            })?;
        let components = transformation
            .split(',')
            .map(|token| {
                token.trim().parse::<f64>().map_err(|_| DocumentError::BadNumber {
                    what: "transformation component",
                    value: token.to_string(),
                })
            })
            .collect::<Result<Vec<f64>, DocumentError>>()?;
        if components.len() < 12 {
            return Err(DocumentError::ShortTransformation {
                found: components.len(),
            });
        }

        placements.push(Placement {
            x: components[9],
            y: components[10],
            material,
            ref_id,
        });
        ref_id += 1;
    }
    Ok(placements)
}

/// Render one `<Brick>` block.
///
/// The transformation is a fixed rotation matrix with only the translation
/// varying; the `<Bone>` carries `ref_id + 1` as its sub-part reference.
fn brick_block(placement: &Placement, item_no: u32) -> String {
    format!(
        "<Brick refID=\"{ref_id}\" designID=\"{DESIGN_ID}\" itemNos=\"{item_no}\">\n\
         <Part refID=\"{ref_id}\" designID=\"{DESIGN_ID}\" materials=\"{material},0\" decoration=\"0\">\n\
         <Bone refID=\"{bone_ref}\" transformation=\"1,0,0,0,0,-1,0,1,0,{x},{y},0\"></Bone>\n\
         </Part>\n\
         </Brick>",
        ref_id = placement.ref_id,
        bone_ref = placement.ref_id + 1,
        material = placement.material,
        x = placement.x,
        y = placement.y,
    )
}

/// Write a complete LXFML document: header, one block per placement in
/// input order, footer.
///
/// Item numbers are resolved through the palette; placements produced by
/// the encoder always carry palette materials, so the 0 fallback only
/// surfaces a caller bug in the output rather than panicking.
pub fn write<W: Write>(writer: &mut W, placements: &[Placement], palette: &Palette) -> io::Result<()> {
    writeln!(writer, "{HEADER}")?;
    for placement in placements {
        let item_no = palette
            .by_material(placement.material)
            .map(|entry| entry.item_no)
            .unwrap_or(0);
        writeln!(writer, "{}", brick_block(placement, item_no))?;
    }
    write!(writer, "{FOOTER}")?;
    Ok(())
}
