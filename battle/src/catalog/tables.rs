//! Standard catalog contents

use std::collections::{HashMap, HashSet};

use super::{Catalog, MultiHit};
use crate::types::{SideCondition, StatStages, Status, Type, Volatile};

fn set(ids: &[&'static str]) -> HashSet<&'static str> {
    ids.iter().copied().collect()
}

fn map<V: Copy>(entries: &[(&'static str, V)]) -> HashMap<&'static str, V> {
    entries.iter().copied().collect()
}

#[allow(clippy::too_many_arguments)]
const fn boost(atk: i8, def: i8, spa: i8, spd: i8, spe: i8, accuracy: i8, evasion: i8) -> StatStages {
    StatStages {
        atk,
        def,
        spa,
        spd,
        spe,
        accuracy,
        evasion,
    }
}

#[rustfmt::skip]
pub(super) fn standard() -> Catalog {
    let status_moves = map(&[
        ("willowisp", Status::Burn),
        ("glare", Status::Paralysis),
        ("nuzzle", Status::Paralysis),
        ("stunspore", Status::Paralysis),
        ("thunderwave", Status::Paralysis),
        ("darkvoid", Status::Sleep),
        ("hypnosis", Status::Sleep),
        ("lovelykiss", Status::Sleep),
        ("relicsong", Status::Sleep),
        ("sing", Status::Sleep),
        ("sleeppowder", Status::Sleep),
        ("spore", Status::Sleep),
        ("yawn", Status::Sleep),
        ("poisongas", Status::Poison),
        ("poisonpowder", Status::Poison),
        ("toxicthread", Status::Poison),
        ("toxic", Status::BadPoison),
    ]);

    let volatile_moves: HashMap<&'static str, Volatile> = [
        ("chatter", Volatile::Confusion),
        ("confuseray", Volatile::Confusion),
        ("dynamicpunch", Volatile::Confusion),
        ("flatter", Volatile::Confusion),
        ("supersonic", Volatile::Confusion),
        ("swagger", Volatile::Confusion),
        ("sweetkiss", Volatile::Confusion),
        ("teeterdance", Volatile::Confusion),
        ("curse", Volatile::Curse),
        ("leechseed", Volatile::LeechSeed),
    ]
    .into_iter()
    .collect();

    let boost_moves = map(&[
        //               atk def spa spd spe acc eva
        ("bellydrum",      boost(6, 0, 0, 0, 0, 0, 0)),
        ("bulkup",         boost(1, 1, 0, 0, 0, 0, 0)),
        ("clangoroussoul", boost(1, 1, 1, 1, 1, 0, 0)),
        ("coil",           boost(1, 1, 0, 0, 0, 1, 0)),
        ("dragondance",    boost(1, 0, 0, 0, 1, 0, 0)),
        ("extremeevoboost",boost(2, 2, 2, 2, 2, 0, 0)),
        ("filletaway",     boost(2, 0, 2, 0, 2, 0, 0)),
        ("honeclaws",      boost(1, 0, 0, 0, 0, 1, 0)),
        ("noretreat",      boost(1, 1, 1, 1, 1, 0, 0)),
        ("shellsmash",     boost(2, -1, 2, -1, 2, 0, 0)),
        ("shiftgear",      boost(1, 0, 0, 0, 2, 0, 0)),
        ("swordsdance",    boost(2, 0, 0, 0, 0, 0, 0)),
        ("tidyup",         boost(1, 0, 0, 0, 1, 0, 0)),
        ("victorydance",   boost(1, 1, 0, 0, 1, 0, 0)),
        ("acidarmor",      boost(0, 2, 0, 0, 0, 0, 0)),
        ("barrier",        boost(0, 2, 0, 0, 0, 0, 0)),
        ("cottonguard",    boost(0, 3, 0, 0, 0, 0, 0)),
        ("defensecurl",    boost(0, 1, 0, 0, 0, 0, 0)),
        ("irondefense",    boost(0, 2, 0, 0, 0, 0, 0)),
        ("shelter",        boost(0, 2, 0, 0, 0, 0, 1)),
        ("stockpile",      boost(0, 1, 0, 1, 0, 0, 0)),
        ("stuffcheeks",    boost(0, 2, 0, 0, 0, 0, 0)),
        ("amnesia",        boost(0, 0, 0, 2, 0, 0, 0)),
        ("calmmind",       boost(0, 0, 1, 1, 0, 0, 0)),
        ("geomancy",       boost(0, 0, 2, 2, 2, 0, 0)),
        ("nastyplot",      boost(0, 0, 2, 0, 0, 0, 0)),
        ("quiverdance",    boost(0, 0, 1, 1, 1, 0, 0)),
        ("tailglow",       boost(0, 0, 3, 0, 0, 0, 0)),
        ("takeheart",      boost(0, 0, 1, 1, 0, 0, 0)),
        ("agility",        boost(0, 0, 0, 0, 2, 0, 0)),
        ("autotomize",     boost(0, 0, 0, 0, 2, 0, 0)),
        ("rockpolish",     boost(0, 0, 0, 0, 2, 0, 0)),
        ("curse",          boost(1, 1, 0, 0, -1, 0, 0)),
        ("minimize",       boost(0, 0, 0, 0, 0, 0, 2)),
    ]);

    let mut flinch_chance = HashMap::new();
    for id in [
        "airslash", "astonish", "bite", "doubleironbash", "headbutt", "heartstamp", "iciclecrash",
        "ironhead", "rockslide", "rollingkick", "skyattack", "stomp", "zingzap", "steamroller", "snore",
    ] {
        flinch_chance.insert(id, 0.3);
    }
    for id in ["darkpulse", "dragonrush", "waterfall"] {
        flinch_chance.insert(id, 0.2);
    }
    for id in ["boneclub", "extrasensory", "firefang", "hyperfang", "icefang", "thunderfang"] {
        flinch_chance.insert(id, 0.1);
    }

    let mut recoil = HashMap::new();
    for id in ["doubleedge", "takedown", "submission", "wildcharge", "headcharge"] {
        recoil.insert(id, 1.0 / 4.0);
    }
    for id in ["flareblitz", "bravebird", "volttackle", "woodhammer", "wavecrash"] {
        recoil.insert(id, 1.0 / 3.0);
    }
    for id in ["headsmash", "lightofruin"] {
        recoil.insert(id, 1.0 / 2.0);
    }

    let mut drain = HashMap::new();
    for id in [
        "absorb", "megadrain", "gigadrain", "leechlife", "drainpunch", "hornleech",
        "paraboliccharge", "bitterblade", "dreameater",
    ] {
        drain.insert(id, 0.5);
    }
    for id in ["drainingkiss", "oblivionwing"] {
        drain.insert(id, 0.75);
    }

    let mut multi_hit = HashMap::new();
    for id in [
        "armthrust", "barrage", "bonerush", "bulletseed", "cometpunch", "doubleslap", "furyattack",
        "furyswipes", "iciclespear", "pinmissile", "rockblast", "scaleshot", "spikecannon",
        "tailslap", "watershuriken",
    ] {
        multi_hit.insert(id, MultiHit::Standard);
    }
    for id in [
        "bonemerang", "doublehit", "doubleironbash", "doublekick", "dragondarts", "dualchop",
        "dualwingbeat", "geargrind", "twinbeam", "twineedle",
    ] {
        multi_hit.insert(id, MultiHit::Double);
    }
    for id in ["surgingstrikes", "tripledive"] {
        multi_hit.insert(id, MultiHit::Triple);
    }
    for id in ["triplekick", "tripleaxel"] {
        multi_hit.insert(id, MultiHit::TripleKick);
    }
    multi_hit.insert("populationbomb", MultiHit::PopulationBomb);

    let hazard_setters = map(&[
        ("stealthrock", SideCondition::StealthRock),
        ("stoneaxe", SideCondition::StealthRock),
        ("spikes", SideCondition::Spikes),
        ("ceaselessedge", SideCondition::Spikes),
        ("stickyweb", SideCondition::StickyWeb),
        ("toxicspikes", SideCondition::ToxicSpikes),
    ]);

    let screen_moves = map(&[
        ("reflect", SideCondition::Reflect),
        ("lightscreen", SideCondition::LightScreen),
        ("auroraveil", SideCondition::AuroraVeil),
    ]);

    let contact = set(&[
        "tackle", "scratch", "pound", "slash", "cut", "furyswipes", "rapidspin", "megapunch",
        "firepunch", "thunderpunch", "icepunch", "dizzypunch", "machpunch", "cometpunch",
        "dynamicpunch", "closecombat", "crosschop", "doublekick", "highjumpkick", "jumpkick",
        "lowkick", "rollingkick", "triplekick", "tripleaxel", "bite", "crunch", "hyperfang",
        "superfang", "headbutt", "hornattack", "furyattack", "drillpeck", "peck", "pluck",
        "wingattack", "fly", "dive", "dig", "bodyslam", "doubleedge", "takedown", "flareblitz",
        "bravebird", "volttackle", "wildcharge", "headcharge", "woodhammer", "headsmash",
        "aquatail", "irontail", "dragontail", "shadowpunch", "shadowclaw", "nightslash",
        "psychocut", "xscissor", "uturn", "dragonclaw", "dragonrush", "outrage", "falseswipe",
        "leafblade", "sacredsword", "meteormash", "bulletpunch", "drainpunch", "hammerarm",
        "poweruppunch", "skyuppercut", "suckerpunch", "throatchop", "darkestlariat", "wickedblow",
        "axekick", "ragingbull", "aquastep", "accelerock", "armthrust", "ceaselessedge",
        "collisioncourse", "crushgrip", "direclaw", "dragonascent", "flamecharge", "flipturn",
        "gigatonhammer", "glaiverush", "grassyglide", "icehammer", "icespinner", "jetpunch",
        "kowtowcleave", "lastrespects", "liquidation", "lunge", "mightycleave", "mortalspin",
        "nuzzle", "pounce", "psychofangs", "psyshieldbash", "ragefist", "ragingfist",
        "razorshell", "saltcure", "shadowforce", "skittersmack", "slam", "solarblade",
        "spiritbreak", "stoneaxe", "supercellslam", "surgingstrikes", "thunderouskick",
        "tripledive", "tropkick", "upperhand", "wavecrash", "zenheadbutt", "firefang", "icefang",
        "thunderfang", "ironhead", "stomp", "zingzap", "steamroller", "astonish", "heartstamp",
        "doubleironbash", "waterfall", "knockoff", "fakeout", "facade", "return", "frustration",
        "gyroball", "heavyslam", "heatcrash", "bodypress", "foulplay", "acrobatics",
        "fishiousrend", "hardpress", "submission", "playrough", "seismictoss",
    ]);

    let punch = set(&[
        "bulletpunch", "cometpunch", "dizzypunch", "doubleironbash", "drainpunch", "dynamicpunch",
        "firepunch", "focuspunch", "hammerarm", "headlongrush", "icehammer", "icepunch", "jetpunch",
        "machpunch", "megapunch", "meteormash", "plasmafists", "poweruppunch", "ragefist",
        "shadowpunch", "skyuppercut", "surgingstrikes", "thunderpunch", "wickedblow",
    ]);

    let sound = set(&[
        "alluringvoice", "boomburst", "bugbuzz", "chatter", "clangingscales", "clangoroussoul",
        "clangoroussoulblaze", "confide", "disarmingvoice", "echoedvoice", "eeriespell",
        "grasswhistle", "growl", "healbell", "howl", "hypervoice", "metalsound", "nobleroar",
        "overdrive", "partingshot", "perishsong", "psychicnoise", "relicsong", "roar", "round",
        "screech", "shadowpanic", "sing", "snarl", "snore", "sparklingaria", "supersonic",
        "torchsong", "uproar",
    ]);

    let bullet = set(&[
        "acidspray", "aurasphere", "beakblast", "bulletseed", "electroball", "energyball",
        "focusblast", "gyroball", "mistball", "pollenpuff", "pyroball", "rockblast", "rockwrecker",
        "seedbomb", "syrupbomb", "shadowball", "sludgebomb", "weatherball", "zapcannon",
    ]);

    let gems = map(&[
        ("normalgem", Type::Normal), ("firegem", Type::Fire), ("watergem", Type::Water),
        ("electricgem", Type::Electric), ("grassgem", Type::Grass), ("icegem", Type::Ice),
        ("fightinggem", Type::Fighting), ("poisongem", Type::Poison), ("groundgem", Type::Ground),
        ("flyinggem", Type::Flying), ("psychicgem", Type::Psychic), ("buggem", Type::Bug),
        ("rockgem", Type::Rock), ("ghostgem", Type::Ghost), ("dragongem", Type::Dragon),
        ("darkgem", Type::Dark), ("steelgem", Type::Steel), ("fairygem", Type::Fairy),
    ]);

    let type_boosters = map(&[
        ("silkscarf", Type::Normal), ("charcoal", Type::Fire), ("mysticwater", Type::Water),
        ("magnet", Type::Electric), ("miracleseed", Type::Grass), ("nevermeltice", Type::Ice),
        ("blackbelt", Type::Fighting), ("poisonbarb", Type::Poison), ("softsand", Type::Ground),
        ("sharpbeak", Type::Flying), ("twistedspoon", Type::Psychic), ("silverpowder", Type::Bug),
        ("hardstone", Type::Rock), ("spelltag", Type::Ghost), ("dragonfang", Type::Dragon),
        ("blackglasses", Type::Dark), ("metalcoat", Type::Steel), ("fairyfeather", Type::Fairy),
    ]);

    Catalog {
        status_moves,
        volatile_moves,
        boost_moves,
        flinch_chance,
        recoil,
        drain,
        multi_hit,
        hazard_setters,
        screen_moves,
        contact,
        punch,
        sound,
        bullet,
        always_crit: set(&["flowertrick", "frostbreath", "stormthrow", "surgingstrikes", "wickedblow"]),
        level_damage: set(&["seismictoss", "nightshade", "psywave"]),
        half_hp_damage: set(&["superfang", "naturesmadness", "ruination"]),
        hazard_removal: set(&["rapidspin", "defog", "tidyup", "courtchange", "mortalspin"]),
        anti_boost: set(&["clearsmog", "haze", "whirlwind", "roar", "dragontail"]),
        low_priority_anti_boost: set(&["whirlwind", "roar", "dragontail"]),
        protect: set(&[
            "detect", "protect", "banefulbunker", "burningbulwark", "kingsshield", "obstruct",
            "silktrap", "spikyshield",
        ]),
        pivot: set(&[
            "uturn", "flipturn", "partingshot", "batonpass", "chillyreception", "shedtail",
            "voltswitch", "teleport",
        ]),
        offensive_pivot: set(&["uturn", "flipturn", "voltswitch"]),
        self_recovery: set(&[
            "healorder", "milkdrink", "recover", "rest", "roost", "slackoff", "softboiled",
            "strengthsap",
        ]),
        sacrifice: set(&["healingwish", "lunardance"]),
        item_manipulation: set(&[
            "knockoff", "corrosivegas", "covet", "embargo", "switcheroo", "trick", "thief",
        ]),
        offensive_utility: set(&[
            "direclaw", "knockoff", "nuzzle", "dragontail", "stoneaxe", "ceaselessedge", "fakeout",
            "rapidspin", "mortalspin",
        ]),
        baby_unboost: set(&["growl", "tailwhip", "leer", "withdraw"]),
        choice_items: set(&["choicescarf", "choicespecs", "choiceband"]),
        gems,
        type_boosters,
        happiness_power: 102.0,
    }
}
