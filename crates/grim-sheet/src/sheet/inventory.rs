//! Attacks, equipment, and coin.

use serde::{Deserialize, Serialize};

/// An attack or spell entry. All fields are free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attack {
    /// Attack or spell name.
    pub name: String,
    /// Attack bonus as written (e.g. "+5").
    pub attack_bonus: String,
    /// Damage and type as written (e.g. "1d8+3 slashing").
    pub damage: String,
}

impl Attack {
    /// A new attack with the given name, no bonus, and a d4 of damage.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attack_bonus: "+0".to_string(),
            damage: "1d4".to_string(),
        }
    }
}

/// A carried item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentItem {
    /// Item name.
    pub item: String,
    /// How many are carried.
    pub quantity: u32,
    /// Weight of one unit.
    pub weight: f64,
}

impl EquipmentItem {
    /// One weightless unit of the named item.
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            quantity: 1,
            weight: 0.0,
        }
    }
}

impl Default for EquipmentItem {
    fn default() -> Self {
        Self::new("")
    }
}

/// A coin denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Denomination {
    /// Copper pieces.
    Cp,
    /// Silver pieces.
    Sp,
    /// Electrum pieces.
    Ep,
    /// Gold pieces.
    Gp,
    /// Platinum pieces.
    Pp,
}

impl Denomination {
    /// All denominations from least to most valuable.
    pub const ALL: [Denomination; 5] = [Self::Cp, Self::Sp, Self::Ep, Self::Gp, Self::Pp];

    /// The key used in stored sheets and edit paths.
    pub fn key(self) -> &'static str {
        match self {
            Self::Cp => "cp",
            Self::Sp => "sp",
            Self::Ep => "ep",
            Self::Gp => "gp",
            Self::Pp => "pp",
        }
    }

    /// Parse a denomination key, case-insensitively.
    pub fn from_key(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|d| d.key() == s)
    }

    /// Value of one coin in gold pieces.
    pub fn gold_value(self) -> f64 {
        match self {
            Self::Cp => 0.01,
            Self::Sp => 0.1,
            Self::Ep => 0.5,
            Self::Gp => 1.0,
            Self::Pp => 10.0,
        }
    }
}

/// Coin counts per denomination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    /// Copper pieces.
    pub cp: u32,
    /// Silver pieces.
    pub sp: u32,
    /// Electrum pieces.
    pub ep: u32,
    /// Gold pieces.
    pub gp: u32,
    /// Platinum pieces.
    pub pp: u32,
}

impl Currency {
    /// Coin count for a denomination.
    pub fn get(&self, denomination: Denomination) -> u32 {
        match denomination {
            Denomination::Cp => self.cp,
            Denomination::Sp => self.sp,
            Denomination::Ep => self.ep,
            Denomination::Gp => self.gp,
            Denomination::Pp => self.pp,
        }
    }

    /// Mutable coin count for a denomination.
    pub fn get_mut(&mut self, denomination: Denomination) -> &mut u32 {
        match denomination {
            Denomination::Cp => &mut self.cp,
            Denomination::Sp => &mut self.sp,
            Denomination::Ep => &mut self.ep,
            Denomination::Gp => &mut self.gp,
            Denomination::Pp => &mut self.pp,
        }
    }

    /// Total purse value expressed in gold pieces.
    pub fn total_in_gold(&self) -> f64 {
        Denomination::ALL
            .into_iter()
            .map(|d| f64::from(self.get(d)) * d.gold_value())
            .sum()
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} cp, {} sp, {} ep, {} gp, {} pp",
            self.cp, self.sp, self.ep, self.gp, self.pp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_is_single_unit() {
        let item = EquipmentItem::new("Rope");
        assert_eq!(item.quantity, 1);
        assert_eq!(item.weight, 0.0);
    }

    #[test]
    fn currency_accessors() {
        let mut purse = Currency::default();
        *purse.get_mut(Denomination::Gp) = 12;
        assert_eq!(purse.gp, 12);
        assert_eq!(purse.get(Denomination::Gp), 12);
        assert_eq!(purse.get(Denomination::Cp), 0);
    }

    #[test]
    fn total_in_gold() {
        let purse = Currency {
            cp: 50,
            sp: 5,
            ep: 2,
            gp: 3,
            pp: 1,
        };
        assert!((purse.total_in_gold() - 15.0).abs() < 1e-9);
    }

    #[test]
    fn denomination_keys() {
        assert_eq!(Denomination::from_key("GP"), Some(Denomination::Gp));
        assert_eq!(Denomination::from_key("zz"), None);
    }

    #[test]
    fn display() {
        let purse = Currency {
            gp: 7,
            ..Currency::default()
        };
        assert_eq!(purse.to_string(), "0 cp, 0 sp, 0 ep, 7 gp, 0 pp");
    }
}
