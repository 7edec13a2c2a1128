use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::domain::{FieldLabel, Record};

const INSPECTIONS_MARKER: &str = "Inspections";
const GENERAL_FREIGHT: &str = "General Freight";

/// Labels dropped from every extraction. Nothing in `FIELD_RECIPES`
/// produces them today.
pub const DISCARDED_LABELS: [FieldLabel; 2] = [FieldLabel::Hazmat, FieldLabel::Iep];

static HEADER_CELL: LazyLock<Selector> = LazyLock::new(|| selector("th"));
static DATA_CELL: LazyLock<Selector> = LazyLock::new(|| selector("td"));
static INSPECTION_CELL: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"td.queryfield[align="center"]"#));
static DECORATED_TEXT: LazyLock<Selector> = LazyLock::new(|| selector("font"));

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector must parse")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Header,
    Data,
    InspectionValue,
    Decorated,
}

#[derive(Debug, Clone, Copy)]
pub enum TextMatch<'t> {
    Exact(&'t str),
    Contains(&'t str),
}

impl TextMatch<'_> {
    fn matches(&self, text: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => text == *expected,
            TextMatch::Contains(needle) => text.contains(needle),
        }
    }
}

/// Label-driven lookups over a rendered snapshot page.
pub trait LabeledDocument {
    type Cell: Copy;

    /// First cell of `kind`, in document order, whose text satisfies `text`.
    fn find(&self, kind: CellKind, text: TextMatch<'_>) -> Option<Self::Cell>;

    /// First cell of `kind` after `anchor` in document order.
    fn next(&self, anchor: Self::Cell, kind: CellKind) -> Option<Self::Cell>;

    /// Cell text with surrounding whitespace trimmed.
    fn text(&self, cell: Self::Cell) -> String;
}

#[derive(Clone, Copy)]
pub struct HtmlPage<'a> {
    html: &'a Html,
}

impl<'a> HtmlPage<'a> {
    pub fn new(html: &'a Html) -> Self {
        HtmlPage { html }
    }
}

fn kind_selector(kind: CellKind) -> &'static Selector {
    match kind {
        CellKind::Header => &HEADER_CELL,
        CellKind::Data => &DATA_CELL,
        CellKind::InspectionValue => &INSPECTION_CELL,
        CellKind::Decorated => &DECORATED_TEXT,
    }
}

impl<'a> LabeledDocument for HtmlPage<'a> {
    type Cell = ElementRef<'a>;

    fn find(&self, kind: CellKind, text: TextMatch<'_>) -> Option<ElementRef<'a>> {
        self.html
            .select(kind_selector(kind))
            .find(|cell| text.matches(&cell.text().collect::<String>()))
    }

    fn next(&self, anchor: ElementRef<'a>, kind: CellKind) -> Option<ElementRef<'a>> {
        let selector = kind_selector(kind);
        self.html
            .root_element()
            .descendants()
            .skip_while(|node| node.id() != anchor.id())
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|cell| selector.matches(cell))
    }

    fn text(&self, cell: ElementRef<'a>) -> String {
        cell.text().collect::<String>().trim().to_string()
    }
}

/// How one entry of the snapshot page becomes record fields.
#[derive(Debug, Clone, Copy)]
enum Recipe {
    /// `th` reading "Label:" followed by a `td` holding the value.
    Labeled(FieldLabel),
    /// Header containing "Inspections", then the vehicle and driver counts.
    Inspections,
    /// "General Freight" cargo cell, reduced to Yes/No by its marker.
    GeneralFreight,
}

const FIELD_RECIPES: [Recipe; 8] = [
    Recipe::Labeled(FieldLabel::EntityType),
    Recipe::Labeled(FieldLabel::OperatingStatus),
    Recipe::Labeled(FieldLabel::LegalName),
    Recipe::Labeled(FieldLabel::PhysicalAddress),
    Recipe::Labeled(FieldLabel::Phone),
    Recipe::Labeled(FieldLabel::McMxFfNumbers),
    Recipe::Inspections,
    Recipe::GeneralFreight,
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub fields: Record,
    /// Expected rows that were missing. Informational only.
    pub gaps: Vec<String>,
}

impl Recipe {
    fn apply<D: LabeledDocument>(self, doc: &D, out: &mut Extraction) {
        match self {
            Recipe::Labeled(label) => {
                let header = label.header_text();
                let value = doc
                    .find(CellKind::Header, TextMatch::Exact(&header))
                    .and_then(|cell| doc.next(cell, CellKind::Data))
                    .map(|cell| doc.text(cell));

                if let Some(value) = value {
                    out.fields.insert(label, value);
                }
            }
            Recipe::Inspections => {
                let Some(header) =
                    doc.find(CellKind::Header, TextMatch::Contains(INSPECTIONS_MARKER))
                else {
                    out.gaps
                        .push(format!("'{}' row not found", INSPECTIONS_MARKER));
                    return;
                };

                let vehicle = doc.next(header, CellKind::InspectionValue);
                let driver = vehicle.and_then(|cell| doc.next(cell, CellKind::InspectionValue));

                if let Some(cell) = vehicle {
                    out.fields.insert(FieldLabel::Vehicle, doc.text(cell));
                }
                match driver {
                    Some(cell) => out.fields.insert(FieldLabel::Driver, doc.text(cell)),
                    None => out.gaps.push(format!(
                        "'{}' row is missing its vehicle/driver cells",
                        INSPECTIONS_MARKER
                    )),
                }
            }
            Recipe::GeneralFreight => {
                let Some(cell) = doc.find(CellKind::Data, TextMatch::Exact(GENERAL_FREIGHT))
                else {
                    return;
                };

                let marker = doc
                    .next(cell, CellKind::Data)
                    .and_then(|next| doc.next(next, CellKind::Decorated))
                    .map(|font| doc.text(font))
                    .unwrap_or_default();

                let output = match marker.is_empty() {
                    true => "No",
                    false => "Yes",
                };
                out.fields.insert(FieldLabel::GeneralFreightOutput, output);
            }
        }
    }
}

/// Runs every field recipe over `doc`. Absent rows are left out of the
/// result, never filled with placeholders.
pub fn extract_from<D: LabeledDocument>(doc: &D) -> Extraction {
    let mut extraction = Extraction::default();

    for recipe in FIELD_RECIPES {
        recipe.apply(doc, &mut extraction);
    }
    for label in DISCARDED_LABELS {
        extraction.fields.remove(label);
    }

    extraction
}

/// Parses a rendered snapshot page and extracts its fields. Unparseable
/// markup yields an empty extraction.
pub fn extract(document: &str) -> Extraction {
    let html = Html::parse_document(document);
    extract_from(&HtmlPage::new(&html))
}

#[cfg(test)]
pub(crate) mod fixtures {
    pub fn snapshot_page(entity_type: &str, operating_status: &str, freight: &str) -> String {
        format!(
            r#"<html><body>
            <table>
              <tr><th><a class="querylabel">Entity Type:</a></th><td class="queryfield">{entity_type}</td></tr>
              <tr><th>Operating Status:</th><td class="queryfield">
                  {operating_status}
              </td></tr>
              <tr><th>Legal Name:</th><td>Acme Trucking</td></tr>
              <tr><th>Physical Address:</th><td>1 Depot Rd, Springfield</td></tr>
              <tr><th>Phone:</th><td>(555) 010-0000</td></tr>
              <tr><th>MC/MX/FF Number(s):</th><td>MC-101</td></tr>
            </table>
            <table>
              <tr><th>Type</th><th>Vehicle</th><th>Driver</th></tr>
              <tr><th>Inspections</th>
                  <td align="center" class="queryfield">12</td>
                  <td align="center" class="queryfield">7</td></tr>
            </table>
            {freight}
            </body></html>"#
        )
    }

    pub const FREIGHT_MARKED: &str = r#"<table><tr><td>General Freight</td><td><font>X</font></td></tr></table>"#;
    pub const FREIGHT_UNMARKED: &str = r#"<table><tr><td>General Freight</td><td><font></font></td></tr></table>"#;
}
