//! Built-in tray catalogs.
//!
//! Static tables of the named tray types staff pick from, grouped by pot
//! size within each product line. Dimensions are outer tray dimensions in
//! inches.

use crate::tray::Tray;

/// A named tray type from a catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraySpec {
    /// Display name.
    pub name: &'static str,
    /// Outer width in inches.
    pub width: f64,
    /// Outer length in inches.
    pub length: f64,
    /// Pots per tray.
    pub pot_count: u32,
}

impl TraySpec {
    /// Converts the catalog entry into a [`Tray`] for a layout run.
    pub fn to_tray(&self) -> Tray {
        Tray::new(self.name, self.width, self.length, self.pot_count)
    }
}

/// Tray types sharing one pot size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PotSizeGroup {
    /// Pot size label, e.g. `"1 Pint"`.
    pub size: &'static str,
    /// Tray types available in this pot size.
    pub trays: &'static [TraySpec],
}

/// The product lines carrying a tray catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductLine {
    /// Classic pot trays.
    Classic,
    /// Stadium pot trays.
    Stadium,
    /// 3D pot trays.
    ThreeD,
}

impl ProductLine {
    /// Returns the catalog for this product line, grouped by pot size.
    pub fn groups(&self) -> &'static [PotSizeGroup] {
        match self {
            ProductLine::Classic => CLASSIC,
            ProductLine::Stadium => STADIUM,
            ProductLine::ThreeD => THREE_D,
        }
    }

    /// All product lines, in display order.
    pub fn all() -> &'static [ProductLine] {
        &[
            ProductLine::Classic,
            ProductLine::Stadium,
            ProductLine::ThreeD,
        ]
    }

    /// Looks up a pot-size group by its label.
    pub fn group(&self, size: &str) -> Option<&'static PotSizeGroup> {
        self.groups().iter().find(|g| g.size == size)
    }
}

impl std::fmt::Display for ProductLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductLine::Classic => write!(f, "Classic"),
            ProductLine::Stadium => write!(f, "Stadium"),
            ProductLine::ThreeD => write!(f, "3D"),
        }
    }
}

static CLASSIC: &[PotSizeGroup] = &[
    PotSizeGroup {
        size: "1 Pint",
        trays: &[
            TraySpec {
                name: "1 Pint 10-Regular Tray",
                width: 17.52,
                length: 5.99,
                pot_count: 10,
            },
            TraySpec {
                name: "1 Pint 12-Turned Tray",
                width: 18.04,
                length: 7.01,
                pot_count: 12,
            },
        ],
    },
    PotSizeGroup {
        size: "1.5 Pint",
        trays: &[
            TraySpec {
                name: "1.5 Pint 8-Turned Tray",
                width: 14.26,
                length: 7.92,
                pot_count: 8,
            },
            TraySpec {
                name: "1.5 Pint 10-Reg Tray",
                width: 19.89,
                length: 7.13,
                pot_count: 10,
            },
            TraySpec {
                name: "1.5 Pint 12-Turned Tray",
                width: 21.38,
                length: 7.92,
                pot_count: 12,
            },
        ],
    },
    PotSizeGroup {
        size: "1 Quart",
        trays: &[
            TraySpec {
                name: "1 Quart 8-Turned Tray",
                width: 15.67,
                length: 9.89,
                pot_count: 8,
            },
            TraySpec {
                name: "1 Quart 10-Turned Tray",
                width: 19.57,
                length: 9.89,
                pot_count: 10,
            },
        ],
    },
    PotSizeGroup {
        size: "2 Quart",
        trays: &[
            TraySpec {
                name: "2 Quart 6-Turned Tray",
                width: 14.73,
                length: 11.89,
                pot_count: 6,
            },
            TraySpec {
                name: "2 Quart 6-Reg Tray",
                width: 17.84,
                length: 9.81,
                pot_count: 6,
            },
            TraySpec {
                name: "2 Quart 8-Turned Tray",
                width: 19.65,
                length: 11.89,
                pot_count: 8,
            },
        ],
    },
];

static STADIUM: &[PotSizeGroup] = &[
    PotSizeGroup {
        size: "1 Pint",
        trays: &[
            TraySpec {
                name: "Stadium 1 Pint 10-Count Tray",
                width: 20.00,
                length: 6.63,
                pot_count: 10,
            },
            TraySpec {
                name: "Stadium 1 Pint 12-Count Tray",
                width: 20.00,
                length: 8.00,
                pot_count: 12,
            },
        ],
    },
    PotSizeGroup {
        size: "1.5 Pint",
        trays: &[
            TraySpec {
                name: "Stadium 1.5 Pint 8-Count Tray",
                width: 17.31,
                length: 7.50,
                pot_count: 8,
            },
            TraySpec {
                name: "Stadium 1.5 Pint 10-Count Tray",
                width: 21.63,
                length: 7.50,
                pot_count: 10,
            },
        ],
    },
    PotSizeGroup {
        size: "1 Quart",
        trays: &[TraySpec {
            name: "Stadium 1 Quart 8-Count Tray",
            width: 20.00,
            length: 8.00,
            pot_count: 8,
        }],
    },
    PotSizeGroup {
        size: "2 Quart",
        trays: &[TraySpec {
            name: "Stadium 2 Quart 6-Count Tray",
            width: 18.00,
            length: 10.00,
            pot_count: 6,
        }],
    },
];

static THREE_D: &[PotSizeGroup] = &[
    PotSizeGroup {
        size: "1 Pint",
        trays: &[TraySpec {
            name: "3D 1 Pint 12-Count Regular Tray",
            width: 21.00,
            length: 7.00,
            pot_count: 12,
        }],
    },
    PotSizeGroup {
        size: "1.5 Pint",
        trays: &[TraySpec {
            name: "3D 1.5 Pint 10-Count Tray",
            width: 19.50,
            length: 7.20,
            pot_count: 10,
        }],
    },
    PotSizeGroup {
        size: "1 Quart",
        trays: &[TraySpec {
            name: "3D 1 Quart 10-Count Regular Tray",
            width: 20.82,
            length: 8.52,
            pot_count: 10,
        }],
    },
    PotSizeGroup {
        size: "2 Quart",
        trays: &[TraySpec {
            name: "3D 2 Quart 6-Count Tray",
            width: 18.00,
            length: 11.13,
            pot_count: 6,
        }],
    },
];
