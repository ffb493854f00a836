//! Built-in fill words for the default word-square assembler.
//!
//! Themed pools from a completion provider rarely interlock on their
//! own; these common crossword entries let the assembler complete a
//! square once the theme-word minimum is met.

/// Common five-letter crossword fill.
pub const FILL_WORDS: &[&str] = &[
    "ABUSE", "ADOBE", "AGENT", "AGREE", "ALERT", "ALIEN", "ALLEY", "ALONE", "ANGEL", "ANGLE",
    "APPLE", "ARENA", "AROSE", "ASSET", "AUDIO", "AWARE", "BADGE", "BAKER", "BASIN", "BEACH",
    "BEGAN", "BENCH", "BIRTH", "BLAZE", "BRAID", "BRAIN", "BREAD", "BRICK", "BRIDE", "BROWN",
    "CABLE", "CANAL", "CARGO", "CEDAR", "CHAIR", "CHESS", "CHORD", "CIDER", "CLEAN", "CLOCK",
    "CORAL", "CRANE", "CREST", "CROWN", "DAILY", "DANCE", "DELTA", "DINER", "DREAM", "DRESS",
    "EAGER", "EAGLE", "EARTH", "EIGHT", "ELBOW", "EMBER", "ENTER", "ERASE", "ESSAY", "EVENT",
    "FABLE", "FAIRY", "FENCE", "FIELD", "FLAME", "FLEET", "FLOUR", "FORGE", "FRAME", "FROST",
    "GIANT", "GLOBE", "GRAIN", "GRAPE", "GRASS", "GREEN", "HEART", "HONEY", "HORSE", "HOTEL",
    "HOUSE", "IDEAL", "IMAGE", "INDEX", "IRONY", "IVORY", "JELLY", "JUICE", "KNEEL", "LABEL",
    "LASER", "LATER", "LEASE", "LEMON", "LEVEL", "LIGHT", "LLAMA", "LODGE", "LUNAR", "MAPLE",
    "MARCH", "MEDAL", "METAL", "MINOR", "MODEL", "MOTEL", "MOUSE", "NOBLE", "NORTH",
    "NOVEL", "OASIS", "OCEAN", "OLIVE", "ONION", "OPERA", "ORBIT", "ORGAN", "OTTER", "PAINT",
    "PANEL", "PAPER", "PEARL", "PIANO", "PLANE", "PLANT", "PRIDE", "PRIZE", "QUEEN", "RADIO",
    "RAISE", "RANGE", "RESIN", "RIDGE", "RIVER", "ROBIN", "ROUND", "ROUTE", "ROYAL", "SALAD",
    "SCALE", "SCENE", "SERVE", "SHEEP", "SHELF", "SHINE", "SHORE", "SIGHT", "SLATE", "SMILE",
    "SOLAR", "SOUND", "SPACE", "SPICE", "STAGE", "STEAM", "STEEL", "STONE", "STORM", "SUGAR",
    "SWEET", "TABLE", "TENOR", "THEME", "TIGER", "TITLE", "TOAST", "TORCH", "TOWER", "TRACE",
    "TRAIL", "TRAIN", "TREND", "TRIBE", "TRUNK", "TULIP", "UNITE", "URBAN", "VALUE", "VAPOR",
    "VENUE", "VIOLA", "VIVID", "VOCAL", "WAGON", "WATER", "WHALE", "WHEAT", "WHEEL", "WHITE",
    "WORLD", "WOVEN", "YACHT", "YEAST", "YOUTH", "ZEBRA",
];
