use std::fmt;

/// Columns a carrier snapshot can contribute to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldLabel {
    EntityType,
    OperatingStatus,
    LegalName,
    PhysicalAddress,
    Phone,
    McMxFfNumbers,
    Vehicle,
    Driver,
    GeneralFreightOutput,
    Hazmat,
    Iep,
}

impl FieldLabel {
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldLabel::EntityType => "Entity Type",
            FieldLabel::OperatingStatus => "Operating Status",
            FieldLabel::LegalName => "Legal Name",
            FieldLabel::PhysicalAddress => "Physical Address",
            FieldLabel::Phone => "Phone",
            FieldLabel::McMxFfNumbers => "MC/MX/FF Number(s)",
            FieldLabel::Vehicle => "Vehicle",
            FieldLabel::Driver => "Driver",
            FieldLabel::GeneralFreightOutput => "General_Freight_Output",
            FieldLabel::Hazmat => "Hazmat",
            FieldLabel::Iep => "IEP",
        }
    }

    /// Text of the `th` cell labelling this field on the snapshot page.
    pub fn header_text(self) -> String {
        format!("{}:", self.as_str())
    }
}

impl fmt::Display for FieldLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
