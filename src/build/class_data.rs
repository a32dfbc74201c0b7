//! Generated class tables for the random build generator.
//! Do not edit manually.

use phf::phf_map;

/// An active skill and its five runes, in calculator order.
#[derive(Debug)]
pub struct ActiveSkill {
    pub name: &'static str,
    pub runes: [&'static str; 5],
    /// Rune letters as used by skill URLs, parallel to `runes`.
    pub rune_urls: &'static str,
}

#[derive(Debug)]
pub struct ClassData {
    pub tag: &'static str,
    pub name: &'static str,
    pub groups: [&'static str; 6],
    pub passive_codes: &'static str,
    pub active_groups: [&'static str; 6],
    /// Skills that cannot sit on the left mouse button.
    pub no_left: &'static str,
    /// At most one of these may appear in a build.
    pub only_one: &'static str,
    pub actives: &'static phf::Map<char, ActiveSkill>,
    pub passives: &'static phf::Map<char, &'static str>,
}

#[derive(Debug)]
pub struct ParagonCategory {
    pub category: &'static str,
    pub choices: [&'static str; 4],
}

static BARBARIAN_ACTIVES: phf::Map<char, ActiveSkill> = phf_map! {
    'a' => ActiveSkill {
        name: "Bash",
        runes: ["Frostbite", "Onslaught", "Punish", "Instigation", "Pulverize"],
        rune_urls: "cabde",
    },
    'b' => ActiveSkill {
        name: "Cleave",
        runes: ["Rupture", "Reaping Swing", "Scattering Blast", "Broad Sweep", "Gathering Storm"],
        rune_urls: "edcab",
    },
    'W' => ActiveSkill {
        name: "Frenzy",
        runes: ["Sidearm", "Berserk", "Vanguard", "Smite", "Maniac"],
        rune_urls: "becda",
    },
    'g' => ActiveSkill {
        name: "Weapon Throw",
        runes: ["Mighty Throw", "Ricochet", "Throwing Hammer", "Stupefy", "Balanced Weapon"],
        rune_urls: "abced",
    },
    'Z' => ActiveSkill {
        name: "Hammer of the Ancients",
        runes: ["Rolling Thunder", "Smash", "The Devil's Anvil", "Thunderstrike", "Birthright"],
        rune_urls: "baced",
    },
    'c' => ActiveSkill {
        name: "Rend",
        runes: ["Ravage", "Blood Lust", "Lacerate", "Mutilate", "Bloodbath"],
        rune_urls: "bdace",
    },
    'e' => ActiveSkill {
        name: "Seismic Slam",
        runes: ["Stagger", "Shattered Ground", "Rumble", "Strength from Earth", "Permafrost"],
        rune_urls: "cabde",
    },
    'h' => ActiveSkill {
        name: "Whirlwind",
        runes: ["Dust Devils", "Hurricane", "Blood Funnel", "Wind Shear", "Volcanic Eruption"],
        rune_urls: "bceda",
    },
    'Q' => ActiveSkill {
        name: "Ancient Spear",
        runes: ["Ranseur", "Harpoon", "Jagged Edge", "Boulder Toss", "Rage Flip"],
        rune_urls: "dacbe",
    },
    'Y' => ActiveSkill {
        name: "Ground Stomp",
        runes: ["Deafening Crash", "Wrenching Smash", "Trembling Stomp", "Foot of the Mountain", "Jarring Slam"],
        rune_urls: "ebadc",
    },
    'X' => ActiveSkill {
        name: "Leap",
        runes: ["Iron Impact", "Launch", "Toppling Impact", "Call of Arreat", "Death from Above"],
        rune_urls: "dcbae",
    },
    'U' => ActiveSkill {
        name: "Sprint",
        runes: ["Rush", "Run Like the Wind", "Marathon", "Gangway", "Forced March"],
        rune_urls: "bcaed",
    },
    'i' => ActiveSkill {
        name: "Ignore Pain",
        runes: ["Bravado", "Iron Hide", "Ignorance is Bliss", "Mob Rule", "Contempt for Weakness"],
        rune_urls: "dbeca",
    },
    'd' => ActiveSkill {
        name: "Overpower",
        runes: ["Storm of Steel", "Killing Spree", "Crushing Advance", "Momentum", "Revel"],
        rune_urls: "baedc",
    },
    'V' => ActiveSkill {
        name: "Revenge",
        runes: ["Blood Law", "Best Served Cold", "Retribution", "Grudge", "Provocation"],
        rune_urls: "deacb",
    },
    'S' => ActiveSkill {
        name: "Furious Charge",
        runes: ["Battering Ram", "Merciless Assault", "Stamina", "Cold Rush", "Dreadnought"],
        rune_urls: "aedcb",
    },
    'l' => ActiveSkill {
        name: "Avalanche",
        runes: ["Lahar", "Snow-Capped Mountain", "Tectonic Rift", "Glacier", "Volcano"],
        rune_urls: "dbeac",
    },
    'f' => ActiveSkill {
        name: "Threatening Shout",
        runes: ["Intimidate", "Falter", "Grim Harvest", "Demoralize", "Terrify"],
        rune_urls: "bdcae",
    },
    'R' => ActiveSkill {
        name: "Battle Rage",
        runes: ["Marauder's Rage", "Ferocity", "Swords to Ploughshares", "Into the Fray", "Bloodshed"],
        rune_urls: "abcde",
    },
    'k' => ActiveSkill {
        name: "War Cry",
        runes: ["Hardened Wrath", "Charge!", "Invigorate", "Veteran's Warning", "Impunity"],
        rune_urls: "adebc",
    },
    'T' => ActiveSkill {
        name: "Earthquake",
        runes: ["Giant's Stride", "Chilling Earth", "The Mountain's Call", "Molten Fury", "Cave-In"],
        rune_urls: "bcdae",
    },
    'j' => ActiveSkill {
        name: "Call of the Ancients",
        runes: ["The Council Rises", "Duty to the Clan", "Ancients' Blessing", "Ancients' Fury", "Together as One"],
        rune_urls: "bdace",
    },
    'P' => ActiveSkill {
        name: "Wrath of the Berserker",
        runes: ["Arreat's Wail", "Insanity", "Slaughter", "Striding Giant", "Thrive on Chaos"],
        rune_urls: "baecd",
    },
};

static BARBARIAN_PASSIVES: phf::Map<char, &'static str> = phf_map! {
    'a' => "Pound of Flesh",
    'Z' => "Ruthless",
    'b' => "Nerves of Steel",
    'Y' => "Weapons Master",
    'c' => "Inspiring Presence",
    'X' => "Berserker Rage",
    'd' => "Bloodthirst",
    'W' => "Animosity",
    'e' => "Superstition",
    'V' => "Tough as Nails",
    'f' => "No Escape",
    'U' => "Relentless",
    'g' => "Brawler",
    'T' => "Juggernaut",
    'h' => "Unforgiving",
    'S' => "Boon of Bul-Kathos",
    'i' => "Earthen Might",
    'R' => "Sword and Board",
    'j' => "Rampage",
};

static CRUSADER_ACTIVES: phf::Map<char, ActiveSkill> = phf_map! {
    'a' => ActiveSkill {
        name: "Punish",
        runes: ["Roar", "Celerity", "Rebirth", "Retaliate", "Fury"],
        rune_urls: "dbcae",
    },
    'b' => ActiveSkill {
        name: "Slash",
        runes: ["Electrify", "Carve", "Crush", "Zeal", "Guard"],
        rune_urls: "bdcae",
    },
    'W' => ActiveSkill {
        name: "Smite",
        runes: ["Shatter", "Shackle", "Surge", "Reaping", "Shared Fate"],
        rune_urls: "cbeda",
    },
    'U' => ActiveSkill {
        name: "Justice",
        runes: ["Burst", "Crack", "Hammer of Pursuit", "Sword of Justice", "Holy Bolt"],
        rune_urls: "dbcae",
    },
    'Z' => ActiveSkill {
        name: "Shield Bash",
        runes: ["Shattered Shield", "One on One", "Shield Cross", "Crumble", "Pound"],
        rune_urls: "becad",
    },
    'c' => ActiveSkill {
        name: "Sweep Attack",
        runes: ["Blazing Sweep", "Trip Attack", "Holy Shock", "Gathering Sweep", "Inspiring Sweep"],
        rune_urls: "bdcae",
    },
    'e' => ActiveSkill {
        name: "Blessed Hammer",
        runes: ["Burning Wrath", "Thunderstruck", "Limitless", "Brute Force", "Dominion"],
        rune_urls: "abcde",
    },
    'S' => ActiveSkill {
        name: "Blessed Shield",
        runes: ["Staggering Shield", "Combust", "Divine Aegis", "Shattering Throw", "Piercing Shield"],
        rune_urls: "abcde",
    },
    'k' => ActiveSkill {
        name: "Fist of the Heavens",
        runes: ["Divine Well", "Heaven's Tempest", "Fissure", "Reverberation", "Retribution"],
        rune_urls: "dacbe",
    },
    'Y' => ActiveSkill {
        name: "Shield Glare",
        runes: ["Divine Verdict", "Uncertainty", "Zealous Glare", "Emblazoned Shield", "Subdue"],
        rune_urls: "abdce",
    },
    'X' => ActiveSkill {
        name: "Iron Skin",
        runes: ["Reflective Skin", "Steel Skin", "Explosive Skin", "Charged Up", "Flash"],
        rune_urls: "dbcae",
    },
    'g' => ActiveSkill {
        name: "Consecration",
        runes: ["Bathed in Light", "Bed of Nails", "Aegis Purgatory", "Shattered Ground", "Fearful"],
        rune_urls: "cbade",
    },
    'R' => ActiveSkill {
        name: "Judgment",
        runes: ["Penitence", "Mass Verdict", "Deliberation", "Resolved", "Debilitate"],
        rune_urls: "abcde",
    },
    'd' => ActiveSkill {
        name: "Provoke",
        runes: ["Cleanse", "Flee Fool", "Too Scared to Run", "Charged Up", "Hit Me"],
        rune_urls: "abcde",
    },
    'V' => ActiveSkill {
        name: "Steed Charge",
        runes: ["Spiked Barding", "Nightmare", "Rejuvenation", "Endurance", "Draw and Quarter"],
        rune_urls: "adcbe",
    },
    'i' => ActiveSkill {
        name: "Condemn",
        runes: ["Vacuum", "Unleashed", "Eternal Retaliation", "Shattering Explosion", "Reciprocate"],
        rune_urls: "becda",
    },
    'P' => ActiveSkill {
        name: "Phalanx",
        runes: ["Bowmen", "Shield Charge", "Stampede", "Shield Bearers", "Bodyguard"],
        rune_urls: "abcde",
    },
    'f' => ActiveSkill {
        name: "Laws of Valor",
        runes: ["Invincible", "Frozen in Terror", "Critical", "Unstoppable Force", "Answered Prayer"],
        rune_urls: "abcde",
    },
    'T' => ActiveSkill {
        name: "Laws of Justice",
        runes: ["Protect the Innocent", "Immovable Object", "Faith's Armor", "Decaying Strength", "Bravery"],
        rune_urls: "abcde",
    },
    'j' => ActiveSkill {
        name: "Laws of Hope",
        runes: ["Wings of Angels", "Eternal Hope", "Hopeful Cry", "Faith's Reward", "Promise of Faith"],
        rune_urls: "abcde",
    },
    'h' => ActiveSkill {
        name: "Falling Sword",
        runes: ["Superheated", "Part the Clouds", "Rise Brothers", "Rapid Descent", "Flurry"],
        rune_urls: "abcde",
    },
    'Q' => ActiveSkill {
        name: "Akarat's Champion",
        runes: ["Fire Starter", "Embodiment of Power", "Rally", "Prophet", "Hasteful"],
        rune_urls: "abcde",
    },
    'l' => ActiveSkill {
        name: "Heaven's Fury",
        runes: ["Blessed Ground", "Ascendancy", "Split Fury", "Thou Shalt Not Pass", "Fires of Heaven"],
        rune_urls: "bacde",
    },
    'O' => ActiveSkill {
        name: "Bombardment",
        runes: ["Barrels of Spikes", "Annihilate", "Mine Field", "Impactful Bombardment", "Targeted"],
        rune_urls: "abcde",
    },
};

static CRUSADER_PASSIVES: phf::Map<char, &'static str> = phf_map! {
    'a' => "Heavenly Strength",
    'Z' => "Fervor",
    'b' => "Vigilant",
    'Y' => "Righteousness",
    'c' => "Insurmountable",
    'X' => "Fanaticism",
    'd' => "Indestructible",
    'W' => "Holy Cause",
    'e' => "Wrathful",
    'V' => "Divine Fortress",
    'f' => "Lord Commander",
    'U' => "Hold Your Ground",
    'g' => "Long Arm of the Law",
    'T' => "Iron Maiden",
    'h' => "Renewal",
    'S' => "Finery",
    'i' => "Blunt",
    'R' => "Towering Shield",
};

static DEMON_HUNTER_ACTIVES: phf::Map<char, ActiveSkill> = phf_map! {
    'a' => ActiveSkill {
        name: "Hungering Arrow",
        runes: ["Puncturing Arrow", "Serrated Arrow", "Shatter Shot", "Devouring Arrow", "Spray of Teeth"],
        rune_urls: "dabce",
    },
    'b' => ActiveSkill {
        name: "Entangling Shot",
        runes: ["Chain Gang", "Shock Collar", "Heavy Burden", "Justice is Served", "Bounty Hunter"],
        rune_urls: "bcade",
    },
    'W' => ActiveSkill {
        name: "Bolas",
        runes: ["Volatile Explosives", "Thunder Ball", "Freezing Strike", "Bitter Pill", "Imminent Doom"],
        rune_urls: "acbde",
    },
    'U' => ActiveSkill {
        name: "Evasive Fire",
        runes: ["Hardened", "Parting Gift", "Covering Fire", "Focus", "Surge"],
        rune_urls: "acbed",
    },
    'g' => ActiveSkill {
        name: "Grenade",
        runes: ["Tinkerer", "Cluster Grenades", "Grenade Cache", "Stun Grenade", "Cold Grenade"],
        rune_urls: "dbcea",
    },
    'Z' => ActiveSkill {
        name: "Impale",
        runes: ["Impact", "Chemical Burn", "Overpenetration", "Ricochet", "Grievous Wounds"],
        rune_urls: "bcade",
    },
    'c' => ActiveSkill {
        name: "Rapid Fire",
        runes: ["Withering Fire", "Frost Shots", "Fire Support", "High Velocity", "Bombardment"],
        rune_urls: "decba",
    },
    'e' => ActiveSkill {
        name: "Chakram",
        runes: ["Twin Chakrams", "Serpentine", "Razor Disk", "Boomerang", "Shuriken Cloud"],
        rune_urls: "acdbe",
    },
    'R' => ActiveSkill {
        name: "Elemental Arrow",
        runes: ["Ball Lightning", "Frost Arrow", "Immolation Arrow", "Lightning Bolts", "Nether Tentacles"],
        rune_urls: "baced",
    },
    'Y' => ActiveSkill {
        name: "Caltrops",
        runes: ["Hooked Spines", "Torturous Ground", "Jagged Spikes", "Carved Stakes", "Bait the Trap"],
        rune_urls: "bcade",
    },
    'X' => ActiveSkill {
        name: "Smoke Screen",
        runes: ["Displacement", "Lingering Fog", "Healing Vapors", "Special Recipe", "Vanishing Powder"],
        rune_urls: "ebcda",
    },
    'T' => ActiveSkill {
        name: "Shadow Power",
        runes: ["Night Bane", "Blood Moon", "Well of Darkness", "Gloom", "Shadow Glide"],
        rune_urls: "aedcb",
    },
    'd' => ActiveSkill {
        name: "Vault",
        runes: ["Action Shot", "Rattling Roll", "Tumble", "Acrobatics", "Trail of Cinders"],
        rune_urls: "cedba",
    },
    'V' => ActiveSkill {
        name: "Preparation",
        runes: ["Invigoration", "Punishment", "Battle Scars", "Focused Mind", "Backup Plan"],
        rune_urls: "badce",
    },
    'S' => ActiveSkill {
        name: "Companion",
        runes: ["Spider Companion", "Bat Companion", "Boar Companion", "Ferret Companion", "Wolf Companion"],
        rune_urls: "adbec",
    },
    'j' => ActiveSkill {
        name: "Marked for Death",
        runes: ["Contagion", "Valley of Death", "Grim Reaper", "Mortal Enemy", "Death Toll"],
        rune_urls: "bcade",
    },
    'f' => ActiveSkill {
        name: "Fan of Knives",
        runes: ["Pinpoint Accuracy", "Bladed Armor", "Knives Expert", "Fan of Daggers", "Assassin's Knives"],
        rune_urls: "deacb",
    },
    'h' => ActiveSkill {
        name: "Spike Trap",
        runes: ["Echoing Blast", "Sticky Trap", "Long Fuse", "Lightning Rod", "Scatter"],
        rune_urls: "bcaed",
    },
    'k' => ActiveSkill {
        name: "Sentry",
        runes: ["Spitfire Turret", "Impaling Bolt", "Chain of Torment", "Polar Station", "Guardian Turret"],
        rune_urls: "cbade",
    },
    'O' => ActiveSkill {
        name: "Vengeance",
        runes: ["Personal Mortar", "Dark Heart", "Side Cannons", "Seethe", "From the Shadows"],
        rune_urls: "cbdea",
    },
    'i' => ActiveSkill {
        name: "Strafe",
        runes: ["Icy Trail", "Drifting Shadow", "Stinging Steel", "Rocket Storm", "Demolition"],
        rune_urls: "bdeca",
    },
    'Q' => ActiveSkill {
        name: "Multishot",
        runes: ["Fire at Will", "Wind Chill", "Suppression Fire", "Full Broadside", "Arsenal"],
        rune_urls: "dbeac",
    },
    'P' => ActiveSkill {
        name: "Cluster Arrow",
        runes: ["Dazzling Arrow", "Shooting Stars", "Maelstrom", "Cluster Bombs", "Loaded for Bear"],
        rune_urls: "ebdca",
    },
    'l' => ActiveSkill {
        name: "Rain of Vengeance",
        runes: ["Dark Cloud", "Shade", "Stampede", "Anathema", "Flying Strike"],
        rune_urls: "baecd",
    },
};

static DEMON_HUNTER_PASSIVES: phf::Map<char, &'static str> = phf_map! {
    'a' => "Thrill of the Hunt",
    'Z' => "Tactical Advantage",
    'b' => "Blood Vengeance",
    'Y' => "Steady Aim",
    'c' => "Cull the Weak",
    'X' => "Night Stalker",
    'd' => "Brooding",
    'W' => "Hot Pursuit",
    'e' => "Archery",
    'V' => "Numbing Traps",
    'f' => "Perfectionist",
    'U' => "Custom Engineering",
    'g' => "Grenadier",
    'T' => "Sharpshooter",
    'h' => "Ballistics",
    'S' => "Leech",
    'i' => "Ambush",
    'R' => "Awareness",
    'j' => "Single Out",
};

static MONK_ACTIVES: phf::Map<char, ActiveSkill> = phf_map! {
    'a' => ActiveSkill {
        name: "Fists of Thunder",
        runes: ["Thunderclap", "Wind Blast", "Static Charge", "Quickening", "Bounding Light"],
        rune_urls: "aecdb",
    },
    'b' => ActiveSkill {
        name: "Deadly Reach",
        runes: ["Piercing Trident", "Searing Grasp", "Scattered Blows", "Strike from Beyond", "Foresight"],
        rune_urls: "becda",
    },
    'W' => ActiveSkill {
        name: "Crippling Wave",
        runes: ["Mangle", "Concussion", "Rising Tide", "Tsunami", "Breaking Wave"],
        rune_urls: "acdbe",
    },
    'U' => ActiveSkill {
        name: "Way of the Hundred Fists",
        runes: ["Hands of Lightning", "Blazing Fists", "Fists of Fury", "Assimilation", "Windforce Flurry"],
        rune_urls: "bcade",
    },
    'Z' => ActiveSkill {
        name: "Lashing Tail Kick",
        runes: ["Vulture Claw Kick", "Sweeping Armada", "Spinning Flame Kick", "Scorpion Sting", "Hand of Ytar"],
        rune_urls: "adbec",
    },
    'c' => ActiveSkill {
        name: "Tempest Rush",
        runes: ["Northern Breeze", "Tailwind", "Flurry", "Electric Field", "Bluster"],
        rune_urls: "dbeca",
    },
    'e' => ActiveSkill {
        name: "Wave of Light",
        runes: ["Wall of Light", "Explosive Light", "Empowered Wave", "Shattering Light", "Pillar of the Ancients"],
        rune_urls: "abdec",
    },
    'Y' => ActiveSkill {
        name: "Blinding Flash",
        runes: ["Self Reflection", "Mystifying Light", "Replenishing Light", "Crippling Light", "Faith in the Light"],
        rune_urls: "dcbea",
    },
    'X' => ActiveSkill {
        name: "Breath of Heaven",
        runes: ["Circle of Scorn", "Circle of Life", "Blazing Wrath", "Infused with Light", "Zephyr"],
        rune_urls: "abcde",
    },
    'g' => ActiveSkill {
        name: "Serenity",
        runes: ["Peaceful Repose", "Unwelcome Disturbance", "Tranquility", "Ascension", "Instant Karma"],
        rune_urls: "aedcb",
    },
    'R' => ActiveSkill {
        name: "Inner Sanctuary",
        runes: ["Sanctified Ground", "Safe Haven", "Temple of Protection", "Intervene", "Forbidden Palace"],
        rune_urls: "bdcae",
    },
    'd' => ActiveSkill {
        name: "Dashing Strike",
        runes: ["Way of the Falling Star", "Blinding Speed", "Quicksilver", "Radiance", "Barrage"],
        rune_urls: "bcdea",
    },
    'V' => ActiveSkill {
        name: "Exploding Palm",
        runes: ["The Flesh is Weak", "Strong Spirit", "Shocking Grasp", "Impending Doom", "Essence Burn"],
        rune_urls: "cdabe",
    },
    'S' => ActiveSkill {
        name: "Sweeping Wind",
        runes: ["Master of Wind", "Blade Storm", "Fire Storm", "Inner Storm", "Cyclone"],
        rune_urls: "eabdc",
    },
    'f' => ActiveSkill {
        name: "Cyclone Strike",
        runes: ["Eye of the Storm", "Implosion", "Sunburst", "Wall of Wind", "Soothing Breeze"],
        rune_urls: "dbaec",
    },
    'T' => ActiveSkill {
        name: "Seven-Sided Strike",
        runes: ["Sudden Assault", "Incinerate", "Pandemonium", "Sustained Attack", "Fulminating Onslaught"],
        rune_urls: "abcde",
    },
    'j' => ActiveSkill {
        name: "Mystic Ally",
        runes: ["Water Ally", "Fire Ally", "Air Ally", "Enduring Ally", "Earth Ally"],
        rune_urls: "badec",
    },
    'P' => ActiveSkill {
        name: "Epiphany",
        runes: ["Desert Shroud", "Ascendance", "Soothing Mist", "Insight", "Inner Fire"],
        rune_urls: "aebcd",
    },
    'h' => ActiveSkill {
        name: "Mantra of Salvation",
        runes: ["Agility", "Divine Protection", "Hard Target", "Perseverance", "Wind through the Reeds"],
        rune_urls: "aecbd",
    },
    'i' => ActiveSkill {
        name: "Mantra of Retribution",
        runes: ["Retaliation", "Transgression", "Indignation", "Against All Odds", "Collateral Damage"],
        rune_urls: "abcde",
    },
    'Q' => ActiveSkill {
        name: "Mantra of Healing",
        runes: ["Sustenance", "Circular Breathing", "Boon of Inspiration", "Heavenly Body", "Time of Need"],
        rune_urls: "adbce",
    },
    'k' => ActiveSkill {
        name: "Mantra of Conviction",
        runes: ["Overawe", "Intimidation", "Dishearten", "Annihilation", "Submission"],
        rune_urls: "aecdb",
    },
};

static MONK_PASSIVES: phf::Map<char, &'static str> = phf_map! {
    'a' => "Resolve",
    'Z' => "Fleet Footed",
    'b' => "Exalted Soul",
    'Y' => "Transcendence",
    'c' => "Chant of Resonance",
    'X' => "Seize the Initiative",
    'd' => "The Guardian's Path",
    'W' => "Sixth Sense",
    'e' => "Determination",
    'V' => "Relentless Assault",
    'f' => "Beacon of Ytar",
    'U' => "Alacrity",
    'g' => "Harmony",
    'T' => "Combination Strike",
    'h' => "Near Death Experience",
    'S' => "Unity",
    'i' => "Momentum",
    'R' => "Mythic Rhythm",
};

static WITCH_DOCTOR_ACTIVES: phf::Map<char, ActiveSkill> = phf_map! {
    'a' => ActiveSkill {
        name: "Poison Dart",
        runes: ["Splinters", "Numbing Dart", "Spined Dart", "Flaming Dart", "Snake to the Face"],
        rune_urls: "bcdae",
    },
    'b' => ActiveSkill {
        name: "Corpse Spiders",
        runes: ["Leaping Spiders", "Spider Queen", "Widowmakers", "Medusa Spiders", "Blazing Spiders"],
        rune_urls: "cbdea",
    },
    'W' => ActiveSkill {
        name: "Plague of Toads",
        runes: ["Explosive Toads", "Piercing Toads", "Rain of Toads", "Addling Toads", "Toad Affinity"],
        rune_urls: "acbed",
    },
    'S' => ActiveSkill {
        name: "Firebomb",
        runes: ["Flash Fire", "Roll the Bones", "Fire Pit", "Pyrogeist", "Ghost Bomb"],
        rune_urls: "ebcda",
    },
    'Z' => ActiveSkill {
        name: "Grasp of the Dead",
        runes: ["Unbreakable Grasp", "Groping Eels", "Death Is Life", "Desperate Grasp", "Rain of Corpses"],
        rune_urls: "caedb",
    },
    'c' => ActiveSkill {
        name: "Firebats",
        runes: ["Dire Bats", "Vampire Bats", "Plague Bats", "Hungry Bats", "Cloud of Bats"],
        rune_urls: "adcbe",
    },
    'e' => ActiveSkill {
        name: "Haunt",
        runes: ["Consuming Spirit", "Resentful Spirits", "Lingering Spirit", "Poisoned Spirit", "Draining Spirit"],
        rune_urls: "aebcd",
    },
    'h' => ActiveSkill {
        name: "Locust Swarm",
        runes: ["Pestilence", "Devouring Swarm", "Cloud of Insects", "Diseased Swarm", "Searing Locusts"],
        rune_urls: "bdcea",
    },
    'Y' => ActiveSkill {
        name: "Summon Zombie Dogs",
        runes: ["Rabid Dogs", "Chilled to the Bone", "Life Link", "Burning Dogs", "Leeching Beasts"],
        rune_urls: "cdbae",
    },
    'X' => ActiveSkill {
        name: "Horrify",
        runes: ["Phobia", "Stalker", "Face of Death", "Frightening Aspect", "Ruthless Terror"],
        rune_urls: "cebad",
    },
    'U' => ActiveSkill {
        name: "Spirit Walk",
        runes: ["Jaunt", "Honored Guest", "Umbral Shock", "Severance", "Healing Journey"],
        rune_urls: "bdcae",
    },
    'i' => ActiveSkill {
        name: "Hex",
        runes: ["Hedge Magic", "Jinx", "Angry Chicken", "Toad of Hugeness", "Unstable Form"],
        rune_urls: "debac",
    },
    'd' => ActiveSkill {
        name: "Soul Harvest",
        runes: ["Swallow Your Soul", "Siphon", "Languish", "Soul to Waste", "Vengeful Spirit"],
        rune_urls: "dacbe",
    },
    'V' => ActiveSkill {
        name: "Sacrifice",
        runes: ["Black Blood", "Next of Kin", "Pride", "For the Master", "Provoke the Pack"],
        rune_urls: "cedba",
    },
    'j' => ActiveSkill {
        name: "Mass Confusion",
        runes: ["Unstable Realm", "Devolution", "Mass Hysteria", "Paranoia", "Mass Hallucination"],
        rune_urls: "debac",
    },
    'f' => ActiveSkill {
        name: "Zombie Charger",
        runes: ["Pile On", "Undeath", "Lumbering Cold", "Explosive Beast", "Zombie Bears"],
        rune_urls: "cdbea",
    },
    'g' => ActiveSkill {
        name: "Spirit Barrage",
        runes: ["The Spirit Is Willing", "Well of Souls", "Phantasm", "Phlebotomize", "Manitou"],
        rune_urls: "dbcae",
    },
    'R' => ActiveSkill {
        name: "Acid Cloud",
        runes: ["Acid Rain", "Lob Blob Bomb", "Slow Burn", "Kiss of Death", "Corpse Bomb"],
        rune_urls: "bcdea",
    },
    'k' => ActiveSkill {
        name: "Wall of Death",
        runes: ["Ring of Poison", "Wall of Zombies", "Surrounded by Death", "Fire Wall", "Communing with Spirits"],
        rune_urls: "bdaec",
    },
    'l' => ActiveSkill {
        name: "Piranhas",
        runes: ["Bogadile", "Zombie Piranhas", "Piranhado", "Wave of Mutilation", "Frozen Piranhas"],
        rune_urls: "abcde",
    },
    'T' => ActiveSkill {
        name: "Gargantuan",
        runes: ["Humongoid", "Restless Giant", "Wrathful Protector", "Big Stinker", "Bruiser"],
        rune_urls: "badce",
    },
    'Q' => ActiveSkill {
        name: "Big Bad Voodoo",
        runes: ["Jungle Drums", "Rain Dance", "Slam Dance", "Ghost Trance", "Boogie Man"],
        rune_urls: "bdace",
    },
    'P' => ActiveSkill {
        name: "Fetish Army",
        runes: ["Fetish Ambush", "Devoted Following", "Legion of Daggers", "Tiki Torchers", "Head Hunters"],
        rune_urls: "adbce",
    },
};

static WITCH_DOCTOR_PASSIVES: phf::Map<char, &'static str> = phf_map! {
    'a' => "Jungle Fortitude",
    'Z' => "Circle of Life",
    'b' => "Spiritual Attunement",
    'Y' => "Gruesome Feast",
    'c' => "Blood Ritual",
    'X' => "Bad Medicine",
    'd' => "Zombie Handler",
    'W' => "Pierce the Veil",
    'e' => "Spirit Vessel",
    'V' => "Fetish Sycophants",
    'f' => "Rush of Essence",
    'U' => "Vision Quest",
    'g' => "Fierce Loyalty",
    'T' => "Grave Injustice",
    'h' => "Tribal Rites",
    'S' => "Confidence Ritual",
    'i' => "Creeping Death",
    'R' => "Swampland Attunement",
    'j' => "Midnight Feast",
};

static WIZARD_ACTIVES: phf::Map<char, ActiveSkill> = phf_map! {
    'a' => ActiveSkill {
        name: "Magic Missile",
        runes: ["Charged Blast", "Glacial Spike", "Split", "Seeker", "Conflagrate"],
        rune_urls: "adbec",
    },
    'b' => ActiveSkill {
        name: "Shock Pulse",
        runes: ["Explosive Bolts", "Fire Bolts", "Piercing Orb", "Power Affinity", "Living Lightning"],
        rune_urls: "eacdb",
    },
    'W' => ActiveSkill {
        name: "Spectral Blade",
        runes: ["Flame Blades", "Siphoning Blade", "Thrown Blade", "Barrier Blades", "Ice Blades"],
        rune_urls: "adbec",
    },
    'U' => ActiveSkill {
        name: "Electrocute",
        runes: ["Chain Lightning", "Forked Lightning", "Lightning Blast", "Surge of Power", "Arc Lightning"],
        rune_urls: "beadc",
    },
    'Z' => ActiveSkill {
        name: "Ray of Frost",
        runes: ["Cold Blood", "Numb", "Black Ice", "Sleet Storm", "Snow Blast"],
        rune_urls: "dceba",
    },
    'c' => ActiveSkill {
        name: "Arcane Orb",
        runes: ["Obliteration", "Arcane Orbit", "Spark", "Scorch", "Frozen Orb"],
        rune_urls: "acbde",
    },
    'e' => ActiveSkill {
        name: "Arcane Torrent",
        runes: ["Flame Ward", "Death Blossom", "Arcane Mines", "Static Discharge", "Cascade"],
        rune_urls: "aecdb",
    },
    'R' => ActiveSkill {
        name: "Disintegrate",
        runes: ["Convergence", "Volatility", "Entropy", "Chaos Nexus", "Intensify"],
        rune_urls: "becda",
    },
    'Y' => ActiveSkill {
        name: "Frost Nova",
        runes: ["Shatter", "Cold Snap", "Frozen Mist", "Deep Freeze", "Bone Chill"],
        rune_urls: "bdcea",
    },
    'X' => ActiveSkill {
        name: "Diamond Skin",
        runes: ["Crystal Shell", "Prism", "Sleek Shell", "Enduring Skin", "Diamond Shards"],
        rune_urls: "cdabe",
    },
    'g' => ActiveSkill {
        name: "Slow Time",
        runes: ["Time Shell", "Exhaustion", "Time Warp", "Point of No Return", "Stretch Time"],
        rune_urls: "cdabe",
    },
    'Q' => ActiveSkill {
        name: "Teleport",
        runes: ["Safe Passage", "Wormhole", "Reversal", "Fracture", "Calamity"],
        rune_urls: "cedba",
    },
    'd' => ActiveSkill {
        name: "Wave of Force",
        runes: ["Impactful Wave", "Debilitating Force", "Arcane Attunement", "Static Pulse", "Heat Wave"],
        rune_urls: "aedbc",
    },
    'V' => ActiveSkill {
        name: "Energy Twister",
        runes: ["Mistral Breeze", "Gale Force", "Raging Storm", "Wicked Wind", "Storm Chaser"],
        rune_urls: "dabec",
    },
    'i' => ActiveSkill {
        name: "Hydra",
        runes: ["Arcane Hydra", "Lightning Hydra", "Blazing Hydra", "Frost Hydra", "Mammoth Hydra"],
        rune_urls: "ebcad",
    },
    'P' => ActiveSkill {
        name: "Meteor",
        runes: ["Thunder Crash", "Star Pact", "Comet", "Meteor Shower", "Molten Impact"],
        rune_urls: "edcba",
    },
    'l' => ActiveSkill {
        name: "Blizzard",
        runes: ["Lightning Storm", "Frozen Solid", "Snowbound", "Apocalypse", "Unrelenting Storm"],
        rune_urls: "cedba",
    },
    'f' => ActiveSkill {
        name: "Ice Armor",
        runes: ["Chilling Aura", "Crystallize", "Jagged Ice", "Ice Reflect", "Frozen Storm"],
        rune_urls: "bdaec",
    },
    'T' => ActiveSkill {
        name: "Storm Armor",
        runes: ["Reactive Armor", "Power of the Storm", "Thunder Storm", "Scramble", "Shocking Aspect"],
        rune_urls: "cdabe",
    },
    'S' => ActiveSkill {
        name: "Magic Weapon",
        runes: ["Electrify", "Force Weapon", "Conduit", "Ignite", "Deflection"],
        rune_urls: "bcdae",
    },
    'j' => ActiveSkill {
        name: "Familiar",
        runes: ["Sparkflint", "Icicle", "Ancient Guardian", "Arcanot", "Cannoneer"],
        rune_urls: "acedb",
    },
    'O' => ActiveSkill {
        name: "Energy Armor",
        runes: ["Absorption", "Pinpoint Barrier", "Energy Tap", "Force Armor", "Prismatic Armor"],
        rune_urls: "debca",
    },
    'h' => ActiveSkill {
        name: "Explosive Blast",
        runes: ["Unleashed", "Flash", "Short Fuse", "Obliterate", "Chain Reaction"],
        rune_urls: "dcabe",
    },
    'k' => ActiveSkill {
        name: "Mirror Image",
        runes: ["Simulacrum", "Duplicates", "Mocking Demise", "Extension of Will", "Mirror Mimics"],
        rune_urls: "cbeda",
    },
    'm' => ActiveSkill {
        name: "Archon",
        runes: ["Combustion", "Teleport", "Pure Power", "Slow Time", "Improved Archon"],
        rune_urls: "ecdba",
    },
    'N' => ActiveSkill {
        name: "Black Hole",
        runes: ["Supermassive", "Absolute Zero", "Event Horizon", "Blazar", "Spellsteal"],
        rune_urls: "aebcd",
    },
};

static WIZARD_PASSIVES: phf::Map<char, &'static str> = phf_map! {
    'a' => "Power Hungry",
    'Z' => "Blur",
    'b' => "Evocation",
    'Y' => "Glass Cannon",
    'c' => "Prodigy",
    'X' => "Astral Presence",
    'd' => "Illusionist",
    'W' => "Cold Blooded",
    'e' => "Conflagration",
    'V' => "Paralysis",
    'f' => "Galvanizing Ward",
    'U' => "Temporal Flux",
    'g' => "Dominance",
    'T' => "Arcane Dynamo",
    'h' => "Unstable Anomaly",
    'S' => "Unwavering Will",
    'i' => "Audacity",
    'R' => "Elemental Exposure",
};

pub static CLASSES: [ClassData; 6] = [
    ClassData {
        tag: "barbarian",
        name: "Barbarian",
        groups: ["Primary", "Secondary", "Defensive", "Might", "Tactics", "Rage"],
        passive_codes: "aZbYcXdWeVfUgThSiRj",
        active_groups: ["abWg", "ZcehQ", "YXUi", "dVSl", "fRk", "TjP"],
        no_left: "UidVfRKP",
        only_one: "",
        actives: &BARBARIAN_ACTIVES,
        passives: &BARBARIAN_PASSIVES,
    },
    ClassData {
        tag: "crusader",
        name: "Crusader",
        groups: ["Primary", "Secondary", "Defensive", "Utility", "Laws", "Conviction"],
        passive_codes: "aZbYcXdWeVfUgThSiR",
        active_groups: ["abWU", "ZceSk", "YXgR", "dViP", "fTj", "hQlO"],
        no_left: "XgifTjQ",
        only_one: "fTj",
        actives: &CRUSADER_ACTIVES,
        passives: &CRUSADER_PASSIVES,
    },
    ClassData {
        tag: "demon-hunter",
        name: "Demon Hunter",
        groups: ["Primary", "Secondary", "Defensive", "Hunting", "Devices", "Archery"],
        passive_codes: "aZbYcXdWeVfUgThSiRj",
        active_groups: ["abWUg", "ZceR", "YXT", "dVSj", "fhkO", "iQPl"],
        no_left: "YXTVSfO",
        only_one: "",
        actives: &DEMON_HUNTER_ACTIVES,
        passives: &DEMON_HUNTER_PASSIVES,
    },
    ClassData {
        tag: "monk",
        name: "Monk",
        groups: ["Primary", "Secondary", "Defensive", "Techniques", "Focus", "Mantras"],
        passive_codes: "aZbYcXdWeVfUgThSi",
        active_groups: ["abWU", "Zce", "YXgR", "dVS", "fTjP", "hiQk"],
        no_left: "YXgRSjPhiQk",
        only_one: "hiQk",
        actives: &MONK_ACTIVES,
        passives: &MONK_PASSIVES,
    },
    ClassData {
        tag: "witch-doctor",
        name: "Witch Doctor",
        groups: ["Primary", "Secondary", "Defensive", "Terror", "Decay", "Voodoo"],
        passive_codes: "aZbYcXdWeVfUgThSiRj",
        active_groups: ["abWS", "Zceh", "YXUi", "dVj", "fgRkl", "TQP"],
        no_left: "XUid",
        only_one: "",
        actives: &WITCH_DOCTOR_ACTIVES,
        passives: &WITCH_DOCTOR_PASSIVES,
    },
    ClassData {
        tag: "wizard",
        name: "Wizard",
        groups: ["Primary", "Secondary", "Defensive", "Force", "Conjuration", "Mastery"],
        passive_codes: "aZbYcXdWeVfUgThSiR",
        active_groups: ["abWU", "ZceR", "YXgQ", "dViPl", "fTSjO", "hkmN"],
        no_left: "YXfTSjOh",
        only_one: "",
        actives: &WIZARD_ACTIVES,
        passives: &WIZARD_PASSIVES,
    },
];

pub static PARAGON: [ParagonCategory; 4] = [
    ParagonCategory {
        category: "Core",
        choices: ["Primary Stat", "Vitality", "Movement Speed", "Resource"],
    },
    ParagonCategory {
        category: "Offensive",
        choices: ["Attack Speed", "Cooldown Reduction", "Critical Hit Chance", "Critical Hit Damage"],
    },
    ParagonCategory {
        category: "Defensive",
        choices: ["Life", "Armor", "Resist All", "Life Regeneration"],
    },
    ParagonCategory {
        category: "Utility",
        choices: ["Area Damage", "Resourc Cost Reduction", "Life on Hit", "Gold Find"],
    },
];
