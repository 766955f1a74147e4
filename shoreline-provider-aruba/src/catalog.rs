//! Static catalog of the monitored beaches on Aruba's north-east coast.

use shoreline_core::model::{CleanupEvent, Coordinates, Location, LocationId, parse_event_date};

struct BeachSeed {
    name: &'static str,
    lat: f64,
    lng: f64,
    description: &'static str,
    image: &'static str,
}

struct CleanupSeed {
    beach: &'static str,
    date: &'static str,
    rating: i32,
    description: &'static str,
    contributor_name: &'static str,
}

const BEACHES: &[BeachSeed] = &[
    BeachSeed {
        name: "Druif beach",
        lat: 12.6078,
        lng: -70.0331,
        description: "here the trash spread across the beach for a long line going towards the light house",
        image: "https://raw.githubusercontent.com/tris2wolff/beach-photos/main/18245.jpg",
    },
    BeachSeed {
        name: "westpunt beach",
        lat: 12.620101,
        lng: -70.047582,
        description: "At this beautiful beach the trash is spread across and inbetween the rocks",
        image: "/images/westpunt beach.png",
    },
    BeachSeed {
        name: "Sasariwichi Dunes",
        lat: 12.617827,
        lng: -70.053508,
        description: "there is trash spread across the dunes mostly bags and light weight trash",
        image: "/images/Sasariwichi Dunes.png",
    },
    BeachSeed {
        name: "Wishing rock garden",
        lat: 12.6039,
        lng: -70.0270,
        description: "the trash is spread out on a short but rocky shore line",
        image: "/images/wishing-rock-garden.png",
    },
    BeachSeed {
        name: "More to the left of Aruba shack beach",
        lat: 12.6008,
        lng: -70.0226182,
        description: "trash spread over the rocky beach shore line",
        image: "/images/more-more-left-of-aruba-shack-beach.png",
    },
    BeachSeed {
        name: "To the left of aruba shack beach",
        lat: 12.59676,
        lng: -70.0195,
        description: "This long strech of rocky shore line has trash spread across the whole shore line",
        image: "/images/left-of-aruba-shack-beach.png",
    },
    BeachSeed {
        name: "Aruba shack beach",
        lat: 12.59522,
        lng: -70.01909,
        description: "a lot Trash is spread over this beach with piles and to the rocky shore line to the right also has a lot of trash spread across",
        image: "/images/shack-beach.jpeg",
    },
    BeachSeed {
        name: "Didi beach",
        lat: 12.59396,
        lng: -70.01873,
        description: "The trash is spread across this small beach",
        image: "/images/didi-beach.jpeg",
    },
    BeachSeed {
        name: "to the left of urirama",
        lat: 12.5921,
        lng: -70.0177,
        description: "this small beach has a massive pile of trash",
        image: "/images/between-urinama-and-didi.jpeg",
    },
    BeachSeed {
        name: "Urirama beach",
        lat: 12.59099,
        lng: -70.01746,
        description: "Insane amount of small pieces of trash micro plastic",
        image: "/images/urirama.jpeg",
    },
    BeachSeed {
        name: "wariruri beach",
        lat: 12.55909,
        lng: -69.98835,
        description: "small trash and bottles and micro plastic spread across the beach",
        image: "/images/wariruri beach.png",
    },
    BeachSeed {
        name: "between ranchero curason and urirama",
        lat: 12.58651,
        lng: -70.01467,
        description: "There is a Big pile of trash and it is also spread around on the rocks and small beach",
        image: "/images/between ranchero and urirama.png",
    },
    BeachSeed {
        name: "ranchero curason",
        lat: 12.58454,
        lng: -70.01299,
        description: "The trash spreads across the shore line",
        image: "/images/ranchero-curason.jpeg",
    },
    BeachSeed {
        name: "Three black stones",
        lat: 12.58226,
        lng: -70.00955,
        description: "very small beach with medium size trash, like plastic bottles",
        image: "/images/three-black-stone.png",
    },
    BeachSeed {
        name: "Fisherman house",
        lat: 12.57122,
        lng: -69.99943,
        description: "medium size plastic spread across this beach. Bonus description: Great shade to rest and take a break",
        image: "/images/fishermans-house.png",
    },
    BeachSeed {
        name: "klif",
        lat: 12.57308,
        lng: -70.00306,
        description: "big beach with large plastics and a lot of heavier weight plastic for example shoes",
        image: "/images/klif.jpg",
    },
    BeachSeed {
        name: "xyqu trail",
        lat: 12.56948,
        lng: -69.99696,
        description: "multiple small piles of trash for example bottles",
        image: "/images/xyqu.png",
    },
    BeachSeed {
        name: "medium size beach",
        lat: 12.56402,
        lng: -69.99144,
        description: "a lot of small size trash and bottles spread around",
        image: "/images/Medium-size-beach.png",
    },
    BeachSeed {
        name: "To the right of wariruri",
        lat: 12.556305,
        lng: -69.980525,
        description: "big beach with medium size trash",
        image: "/images/wariruri beach.png",
    },
    BeachSeed {
        name: "Rancho Boca Tancana",
        lat: 12.576291,
        lng: -70.004486,
        description: "micro plastics spread around the small beach",
        image: "/images/left-of-clif.jpg",
    },
    BeachSeed {
        name: "to the right of ranchero",
        lat: 12.583939,
        lng: -70.012142,
        description: "Beach area to the right of ranchero curason with scattered trash",
        image: "/images/right-of-ranchero-curason.jpeg",
    },
    BeachSeed {
        name: "to the right of three black stone",
        lat: 12.581154,
        lng: -70.008400,
        description: "small beach but the trash is spread across the whole beach",
        image: "/images/right-of-three-black-stones.jpeg",
    },
    BeachSeed {
        name: "Even more to the right of three black stones",
        lat: 12.580291,
        lng: -70.007953,
        description: "small beach but the trash is spread across the beach",
        image: "/images/even-more-right-of three-black-stones.jpeg",
    },
    BeachSeed {
        name: "mtb ave tura",
        lat: 12.570667,
        lng: -69.998472,
        description: "Beach area near mtb ave tura with medium size plastic and bottles",
        image: "/images/mtb-ave-tura.png",
    },
    BeachSeed {
        name: "to the right of xyqu trail",
        lat: 12.568908,
        lng: -69.995896,
        description: "Very small rocky beach but with a lot of trash",
        image: "/images/to-the-right-of-xyqu-trail.jpg",
    },
    BeachSeed {
        name: "even more to the right of xyqu trail",
        lat: 12.568417,
        lng: -69.995111,
        description: "small beach with bottles and random plastics",
        image: "/images/even-more-to-the-right-of-xyqu-trail.png",
    },
    BeachSeed {
        name: "Long stretch of rocky beach",
        lat: 12.567028,
        lng: -69.993665,
        description: "a lot of big and small trash in this area",
        image: "/images/Long-stretch-of-rocky-beach.png",
    },
    BeachSeed {
        name: "to the right of the medium size beach",
        lat: 12.563149,
        lng: -69.990810,
        description: "small beach with a lot of trash from all different sizes",
        image: "/images/to the right of the medium size beach.png",
    },
    BeachSeed {
        name: "small beach with brown sand",
        lat: 12.562083,
        lng: -69.989583,
        description: "small beach with a lot of big and small trash spread across the beach",
        image: "/images/small beach with brown sand.png",
    },
];

const SEED_CLEANUPS: &[CleanupSeed] = &[
    CleanupSeed {
        beach: "Druif beach",
        date: "2024-12-15",
        rating: 9,
        description: "Excellent cleanup! Removed plastic bottles, fishing nets, and seaweed. Beach looks pristine.",
        contributor_name: "Sarah M.",
    },
    CleanupSeed {
        beach: "Druif beach",
        date: "2024-11-20",
        rating: 7,
        description: "Good cleanup session. Found some microplastics and cigarette butts.",
        contributor_name: "Mike R.",
    },
    CleanupSeed {
        beach: "Druif beach",
        date: "2024-10-10",
        rating: 8,
        description: "Cleaned up after storm. Lots of debris but beach is now clean.",
        contributor_name: "Lisa K.",
    },
];

/// Every monitored beach, in catalog order.
pub(crate) fn locations() -> Vec<Location> {
    BEACHES
        .iter()
        .map(|seed| Location {
            id: LocationId::from(seed.name),
            coordinates: Coordinates {
                lat: seed.lat,
                lng: seed.lng,
            },
            description: seed.description.to_owned(),
            image: seed.image.to_owned(),
        })
        .collect()
}

/// Cleanup reports shipped with the catalog.
pub(crate) fn seed_cleanups() -> Vec<CleanupEvent> {
    SEED_CLEANUPS
        .iter()
        .map(|seed| CleanupEvent {
            location: LocationId::from(seed.beach),
            date: parse_event_date(seed.date),
            rating: Some(seed.rating),
            description: Some(seed.description.to_owned()),
            contributor_name: Some(seed.contributor_name.to_owned()),
            photo_url: None,
            created_at: None,
        })
        .collect()
}
