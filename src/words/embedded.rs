//! The word list that ships with the game, used whenever no other list is configured.

use crate::words::Entry;

/// The built-in `(word, hint)` pairs.
const ENTRIES: &[(&str, &str)] = &[
    ("anchor", "Keeps a ship from drifting"),
    ("balloon", "Floats when filled with helium"),
    ("bicycle", "Two wheels and a pair of pedals"),
    ("cactus", "Thrives where it rarely rains"),
    ("compass", "Always points north"),
    ("dolphin", "A clever swimmer that breathes air"),
    ("eclipse", "When one body hides another"),
    ("falcon", "The fastest diver in the sky"),
    ("glacier", "A very slow river of ice"),
    ("guitar", "Six strings and a sound hole"),
    ("harbor", "Where boats wait out the storm"),
    ("igloo", "A house made of snow"),
    ("jigsaw", "A puzzle cut into pieces"),
    ("kettle", "Whistles when the water boils"),
    ("lantern", "Light you can carry around"),
    ("meteor", "A shooting star, up close"),
    ("nebula", "A cloud where stars are born"),
    ("octopus", "Eight arms and three hearts"),
    ("pepper", "Goes along with salt"),
    ("quartz", "A common crystal in watches"),
    ("rainbow", "Seven colors after the rain"),
    ("saddle", "Where a rider sits"),
    ("telescope", "Brings distant things closer"),
    ("umbrella", "Keeps you dry"),
    ("volcano", "A mountain with a temper"),
    ("walrus", "Tusks and whiskers on the ice"),
    ("xylophone", "Struck with mallets, bar by bar"),
    ("yogurt", "Milk with a little culture"),
    ("zipper", "Teeth that hold clothes together"),
];

/// This function builds entries out of the built-in list.
pub(super) fn entries() -> Vec<Entry> {
    ENTRIES
        .iter()
        .filter_map(|&(word, hint)| Entry::new(word, hint).ok())
        .collect()
}
