//! Static coin catalog
//!
//! The five Mexican denominations the user can flip. Denomination affects
//! only the displayed artwork and the label recorded in history, never the
//! outcome probability.

/// Face artwork for the águila (obverse) side.
const AGUILA_ART: &str = "\
   .-~~~-.
  ( (\\^/) )
  (  |o|  )
  ( /(v)\\ )
   `-...-'";

/// Face artwork for the sol (reverse) side.
const SOL_ART: &str = "\
   .-~~~-.
  ( \\ | / )
  ( --(*)-- )
  ( / | \\ )
   `-...-'";

/// A catalog entry: one denomination with its two face artworks.
///
/// Entries are static and immutable; the engine copies the label into the
/// history record at admission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinDefinition {
    pub id: &'static str,
    pub display_label: &'static str,
    pub aguila_art: &'static str,
    pub sol_art: &'static str,
}

/// The available coins. `$1` is the default selection.
pub const COIN_CATALOG: &[CoinDefinition] = &[
    CoinDefinition {
        id: "50c",
        display_label: "50¢",
        aguila_art: AGUILA_ART,
        sol_art: SOL_ART,
    },
    CoinDefinition {
        id: "1p",
        display_label: "$1",
        aguila_art: AGUILA_ART,
        sol_art: SOL_ART,
    },
    CoinDefinition {
        id: "2p",
        display_label: "$2",
        aguila_art: AGUILA_ART,
        sol_art: SOL_ART,
    },
    CoinDefinition {
        id: "5p",
        display_label: "$5",
        aguila_art: AGUILA_ART,
        sol_art: SOL_ART,
    },
    CoinDefinition {
        id: "10p",
        display_label: "$10",
        aguila_art: AGUILA_ART,
        sol_art: SOL_ART,
    },
];

/// Index of the default coin ($1) in [`COIN_CATALOG`].
pub const DEFAULT_COIN_INDEX: usize = 1;

/// The default coin definition.
pub fn default_coin() -> &'static CoinDefinition {
    &COIN_CATALOG[DEFAULT_COIN_INDEX]
}
