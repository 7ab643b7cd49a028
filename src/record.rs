use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

/// Work period code as written on the floor sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum Shift {
    #[strum(serialize = "N")]
    Night,
    #[strum(serialize = "D")]
    Day,
}

impl Shift {
    /// Option label shown in the shift dropdown.
    pub fn label(self) -> &'static str {
        match self {
            Shift::Night => "Night (N)",
            Shift::Day => "Day (D)",
        }
    }
}

/// Three-way color tag. The codes are the only names the sheets use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum ColorType {
    #[strum(serialize = "CR")]
    Cr,
    #[strum(serialize = "BL")]
    Bl,
    #[strum(serialize = "RD")]
    Rd,
}

impl ColorType {
    /// Option label shown in the color dropdown (just the code).
    pub fn label(self) -> &'static str {
        match self {
            ColorType::Cr => "CR",
            ColorType::Bl => "BL",
            ColorType::Rd => "RD",
        }
    }
}

/// The seven inputs of the entry form, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, EnumIter)]
pub enum Field {
    Date,
    Shift,
    Operator,
    Helper,
    DesignNo,
    DesignStitch,
    ColorType,
}

impl Field {
    /// DOM `name`/`id` of the input, matching the record's serialized keys.
    pub fn key(self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Shift => "shift",
            Field::Operator => "operator",
            Field::Helper => "helper",
            Field::DesignNo => "designNo",
            Field::DesignStitch => "designStitch",
            Field::ColorType => "colorType",
        }
    }

    /// Visible label next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Date => "Date",
            Field::Shift => "Shift",
            Field::Operator => "Operator",
            Field::Helper => "Helper",
            Field::DesignNo => "Design No",
            Field::DesignStitch => "Design Stitch",
            Field::ColorType => "CR/BL/RD",
        }
    }

    /// Noun phrase for the "... is required" messages.
    pub fn subject(self) -> &'static str {
        match self {
            Field::Date => "Date",
            Field::Shift => "Shift selection",
            Field::Operator => "Operator name",
            Field::Helper => "Helper name",
            Field::DesignNo => "Design number",
            Field::DesignStitch => "Design stitch count",
            Field::ColorType => "Color type selection",
        }
    }
}

/// One in-progress production entry. Every field holds the raw string from
/// the form; nothing is coerced until validation runs at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRecord {
    pub date: String,
    pub operator: String,
    pub helper: String,
    pub shift: String,
    pub design_no: String,
    pub design_stitch: String,
    pub color_type: String,
}

impl EntryRecord {
    /// Current raw text of one field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Date => &self.date,
            Field::Shift => &self.shift,
            Field::Operator => &self.operator,
            Field::Helper => &self.helper,
            Field::DesignNo => &self.design_no,
            Field::DesignStitch => &self.design_stitch,
            Field::ColorType => &self.color_type,
        }
    }

    /// Overwrites one field. Last edit wins.
    pub fn set_field(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Date => &mut self.date,
            Field::Shift => &mut self.shift,
            Field::Operator => &mut self.operator,
            Field::Helper => &mut self.helper,
            Field::DesignNo => &mut self.design_no,
            Field::DesignStitch => &mut self.design_stitch,
            Field::ColorType => &mut self.color_type,
        };
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn shift_codes_parse_and_print() {
        assert_eq!("N".parse::<Shift>(), Ok(Shift::Night));
        assert_eq!("D".parse::<Shift>(), Ok(Shift::Day));
        assert_eq!(Shift::Night.to_string(), "N");
        //codes are exact: no blanks, no lowercase
        assert!("".parse::<Shift>().is_err());
        assert!("n".parse::<Shift>().is_err());
        assert!("ND".parse::<Shift>().is_err());
    }

    #[test]
    fn color_codes_parse_and_print() {
        assert_eq!("CR".parse::<ColorType>(), Ok(ColorType::Cr));
        assert_eq!("BL".parse::<ColorType>(), Ok(ColorType::Bl));
        assert_eq!("RD".parse::<ColorType>(), Ok(ColorType::Rd));
        assert_eq!(ColorType::Rd.to_string(), "RD");
        assert!("".parse::<ColorType>().is_err());
        assert!("GR".parse::<ColorType>().is_err());
    }

    #[test]
    fn field_accessors_cover_every_slot() {
        let mut record = EntryRecord::default();
        for field in Field::iter() {
            assert_eq!(record.field(field), "");
            record.set_field(field, field.key().to_string());
        }
        for field in Field::iter() {
            assert_eq!(record.field(field), field.key());
        }
    }
}
