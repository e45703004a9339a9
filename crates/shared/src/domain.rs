use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(SelectedColorId);
id_newtype!(WheelEntryId);

/// A color in the user's active working set. `custom` marks colors the user
/// picked directly rather than pulled from the wheel; it only affects display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedColor {
    pub id: SelectedColorId,
    pub hex: String,
    pub custom: bool,
}

/// A color in the persistent palette. Entries seeded by the server carry
/// `removable: false` and never get a delete issued against them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelEntry {
    pub id: WheelEntryId,
    pub hex: String,
    pub removable: bool,
}
