//! Built-in word bank for the word memory game

/// Default words, indexed by position
pub const WORDS: &[&str] = &[
    "apple",
    "anchor",
    "arrow",
    "autumn",
    "badge",
    "bakery",
    "balloon",
    "bamboo",
    "banner",
    "barrel",
    "basket",
    "beacon",
    "blanket",
    "blossom",
    "bottle",
    "bridge",
    "bucket",
    "butter",
    "cabin",
    "cactus",
    "camera",
    "candle",
    "canyon",
    "carpet",
    "castle",
    "cellar",
    "chalk",
    "cherry",
    "chimney",
    "circus",
    "cliff",
    "clock",
    "cloud",
    "coconut",
    "comet",
    "compass",
    "copper",
    "cotton",
    "crayon",
    "crystal",
    "curtain",
    "dagger",
    "desert",
    "diamond",
    "dolphin",
    "dragon",
    "drum",
    "eagle",
    "echo",
    "elbow",
    "ember",
    "engine",
    "falcon",
    "feather",
    "fence",
    "fiddle",
    "flag",
    "flame",
    "forest",
    "fossil",
    "fountain",
    "garden",
    "garlic",
    "ginger",
    "glacier",
    "globe",
    "goblet",
    "granite",
    "guitar",
    "hammer",
    "harbor",
    "helmet",
    "honey",
    "horizon",
    "island",
    "ivory",
    "jacket",
    "jungle",
    "kettle",
    "kitten",
    "ladder",
    "lantern",
    "lemon",
    "lizard",
    "magnet",
    "maple",
    "marble",
    "meadow",
    "mirror",
    "monkey",
    "mountain",
    "needle",
    "nest",
    "ocean",
    "olive",
    "orchard",
    "otter",
    "oyster",
    "paddle",
    "palace",
    "parrot",
    "pebble",
    "pencil",
    "pepper",
    "piano",
    "pillow",
    "planet",
    "pocket",
    "pony",
    "puzzle",
    "quartz",
    "quilt",
    "rabbit",
    "radar",
    "rainbow",
    "raven",
    "ribbon",
    "river",
    "rocket",
    "saddle",
    "sailor",
    "salmon",
    "sandal",
    "scarf",
    "shadow",
    "shell",
    "shovel",
    "silver",
    "skate",
    "sled",
    "spider",
    "sponge",
    "squirrel",
    "statue",
    "stone",
    "storm",
    "sugar",
    "summit",
    "swamp",
    "tablet",
    "teapot",
    "thimble",
    "thunder",
    "ticket",
    "tiger",
    "timber",
    "tomato",
    "torch",
    "tower",
    "tractor",
    "trumpet",
    "tulip",
    "tunnel",
    "turtle",
    "umbrella",
    "valley",
    "velvet",
    "violin",
    "volcano",
    "wagon",
    "walnut",
    "whale",
    "whistle",
    "willow",
    "window",
    "winter",
    "wizard",
    "wolf",
    "yacht",
    "zebra",
];

/// Owned copy of [`WORDS`] for engines that take a bank by value
pub fn default_bank() -> Vec<String> {
    WORDS.iter().map(|w| w.to_string()).collect()
}
