//! Static seed dataset.

use crate::authz::permissions::*;
use crate::types::enums::{TrailDifficulty, TrailImageType, TrailStatus};

pub struct RoleSeed {
    pub name: &'static str,
    pub slug: &'static str,
    pub permissions: &'static [&'static str],
}

pub struct RegionSeed {
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub sort_order: i32,
}

pub struct TrailSeed {
    pub name: &'static str,
    pub slug: &'static str,
    pub region_slug: &'static str,
    pub description: &'static str,
    pub status: TrailStatus,
    pub difficulty: TrailDifficulty,
    pub length_km: f64,
    pub elevation_gain_m: i32,
    pub amenity_slugs: &'static [&'static str],
}

pub struct ImageSeed {
    pub url: &'static str,
    pub image_type: TrailImageType,
    pub caption: &'static str,
}

pub struct TrailImagesSeed {
    pub trail_slug: &'static str,
    pub images: &'static [ImageSeed],
}

pub const SUPER_ADMIN_ROLE: &str = "super_admin";

pub const ROLES: &[RoleSeed] = &[
    RoleSeed {
        name: "Super Admin",
        slug: SUPER_ADMIN_ROLE,
        permissions: &[WILDCARD],
    },
    RoleSeed {
        name: "Administrator",
        slug: "admin",
        permissions: &[
            "users.*",
            "companies.*",
            "group_hikes.*",
            "trails.*",
            "amenities.*",
            "media.*",
            ACTIVITY_LOGS_VIEW,
        ],
    },
    RoleSeed {
        name: "Editor",
        slug: "editor",
        permissions: &[
            TRAILS_VIEW,
            TRAILS_CREATE,
            TRAILS_UPDATE,
            TRAILS_UPDATE_STATUS,
            AMENITIES_VIEW,
            AMENITIES_CREATE,
            AMENITIES_UPDATE,
            MEDIA_VIEW,
            MEDIA_CREATE,
            MEDIA_UPDATE,
        ],
    },
    RoleSeed {
        name: "Hike Organizer",
        slug: "organizer",
        permissions: &[
            GROUP_HIKES_VIEW,
            GROUP_HIKES_CREATE,
            GROUP_HIKES_UPDATE,
            GROUP_HIKES_DELETE,
            COMPANIES_VIEW,
            TRAILS_VIEW,
            MEDIA_VIEW,
            MEDIA_CREATE,
        ],
    },
    RoleSeed {
        name: "Viewer",
        slug: "viewer",
        permissions: &[TRAILS_VIEW, GROUP_HIKES_VIEW, AMENITIES_VIEW, MEDIA_VIEW],
    },
];

pub const REGIONS: &[RegionSeed] = &[
    RegionSeed {
        name: "Cascade Range",
        slug: "cascade-range",
        description: "Volcanic peaks, old-growth forest and alpine lakes of the Pacific Northwest.",
        latitude: 46.8523,
        longitude: -121.7603,
        sort_order: 1,
    },
    RegionSeed {
        name: "Sierra Nevada",
        slug: "sierra-nevada",
        description: "Granite domes, high passes and glacier-carved valleys.",
        latitude: 37.8651,
        longitude: -119.5383,
        sort_order: 2,
    },
    RegionSeed {
        name: "Rocky Mountains",
        slug: "rocky-mountains",
        description: "Continental divide routes, tundra plateaus and fourteeners.",
        latitude: 40.3428,
        longitude: -105.6836,
        sort_order: 3,
    },
    RegionSeed {
        name: "Appalachian Highlands",
        slug: "appalachian-highlands",
        description: "Rolling ridgelines, hardwood forest and long-distance footpaths.",
        latitude: 35.6532,
        longitude: -83.5070,
        sort_order: 4,
    },
    RegionSeed {
        name: "Pacific Coast",
        slug: "pacific-coast",
        description: "Headlands, tide pools and redwood groves along the ocean.",
        latitude: 41.2132,
        longitude: -124.0046,
        sort_order: 5,
    },
];

/// Amenity name → slug
pub const AMENITIES: &[(&str, &str)] = &[
    ("Parking", "parking"),
    ("Restrooms", "restrooms"),
    ("Drinking Water", "drinking-water"),
    ("Picnic Area", "picnic-area"),
    ("Campground", "campground"),
    ("Dog Friendly", "dog-friendly"),
    ("Visitor Center", "visitor-center"),
    ("Wheelchair Accessible", "wheelchair-accessible"),
];

pub const TRAILS: &[TrailSeed] = &[
    TrailSeed {
        name: "Skyline Ridge Loop",
        slug: "skyline-ridge-loop",
        region_slug: "cascade-range",
        description: "A wildflower loop above the treeline with glacier views the whole way.",
        status: TrailStatus::Published,
        difficulty: TrailDifficulty::Moderate,
        length_km: 9.3,
        elevation_gain_m: 520,
        amenity_slugs: &["parking", "restrooms", "visitor-center"],
    },
    TrailSeed {
        name: "Mirror Lake Path",
        slug: "mirror-lake-path",
        region_slug: "sierra-nevada",
        description: "Flat valley-floor walk to a seasonal lake beneath granite walls.",
        status: TrailStatus::Published,
        difficulty: TrailDifficulty::Easy,
        length_km: 3.2,
        elevation_gain_m: 40,
        amenity_slugs: &["parking", "restrooms", "wheelchair-accessible", "drinking-water"],
    },
    TrailSeed {
        name: "Granite Dome Summit",
        slug: "granite-dome-summit",
        region_slug: "sierra-nevada",
        description: "Steep switchbacks and a cable section to a panoramic summit.",
        status: TrailStatus::Published,
        difficulty: TrailDifficulty::Expert,
        length_km: 22.5,
        elevation_gain_m: 1460,
        amenity_slugs: &["parking", "campground"],
    },
    TrailSeed {
        name: "Alpine Tundra Traverse",
        slug: "alpine-tundra-traverse",
        region_slug: "rocky-mountains",
        description: "High-altitude traverse along the divide with elk sightings at dusk.",
        status: TrailStatus::Published,
        difficulty: TrailDifficulty::Hard,
        length_km: 14.8,
        elevation_gain_m: 910,
        amenity_slugs: &["parking", "campground", "drinking-water"],
    },
    TrailSeed {
        name: "Laurel Falls Trail",
        slug: "laurel-falls-trail",
        region_slug: "appalachian-highlands",
        description: "Paved forest path to a two-tier waterfall.",
        status: TrailStatus::Published,
        difficulty: TrailDifficulty::Easy,
        length_km: 4.0,
        elevation_gain_m: 120,
        amenity_slugs: &["parking", "dog-friendly", "picnic-area"],
    },
    TrailSeed {
        name: "Redwood Headlands Walk",
        slug: "redwood-headlands-walk",
        region_slug: "pacific-coast",
        description: "Through giant redwoods and out to a windswept ocean bluff.",
        status: TrailStatus::Draft,
        difficulty: TrailDifficulty::Moderate,
        length_km: 7.6,
        elevation_gain_m: 280,
        amenity_slugs: &["parking", "picnic-area", "dog-friendly"],
    },
];

/// Trail slug → images to download for that trail
pub const TRAIL_IMAGES: &[TrailImagesSeed] = &[
    TrailImagesSeed {
        trail_slug: "skyline-ridge-loop",
        images: &[
            ImageSeed {
                url: "https://picsum.photos/seed/skyline-ridge-loop/1600/1000.jpg",
                image_type: TrailImageType::Featured,
                caption: "Glacier views from the ridge",
            },
            ImageSeed {
                url: "https://picsum.photos/seed/skyline-ridge-meadow/1600/1000.jpg",
                image_type: TrailImageType::Gallery,
                caption: "Wildflower meadow",
            },
        ],
    },
    TrailImagesSeed {
        trail_slug: "mirror-lake-path",
        images: &[ImageSeed {
            url: "https://picsum.photos/seed/mirror-lake-path/1600/1000.jpg",
            image_type: TrailImageType::Featured,
            caption: "Reflections on the lake",
        }],
    },
    TrailImagesSeed {
        trail_slug: "granite-dome-summit",
        images: &[
            ImageSeed {
                url: "https://picsum.photos/seed/granite-dome-summit/1600/1000.jpg",
                image_type: TrailImageType::Featured,
                caption: "Summit panorama",
            },
            ImageSeed {
                url: "https://picsum.photos/seed/granite-dome-trailhead/1600/1000.jpg",
                image_type: TrailImageType::Trailhead,
                caption: "Trailhead sign",
            },
        ],
    },
    TrailImagesSeed {
        trail_slug: "alpine-tundra-traverse",
        images: &[ImageSeed {
            url: "https://picsum.photos/seed/alpine-tundra-traverse/1600/1000.jpg",
            image_type: TrailImageType::Featured,
            caption: "Tundra at sunset",
        }],
    },
    TrailImagesSeed {
        trail_slug: "laurel-falls-trail",
        images: &[
            ImageSeed {
                url: "https://picsum.photos/seed/laurel-falls-trail/1600/1000.jpg",
                image_type: TrailImageType::Featured,
                caption: "Upper falls",
            },
            ImageSeed {
                url: "https://picsum.photos/seed/laurel-falls-map/1600/1000.jpg",
                image_type: TrailImageType::Map,
                caption: "Route overview",
            },
        ],
    },
    TrailImagesSeed {
        trail_slug: "redwood-headlands-walk",
        images: &[ImageSeed {
            url: "https://picsum.photos/seed/redwood-headlands-walk/1600/1000.jpg",
            image_type: TrailImageType::Featured,
            caption: "Fog in the redwoods",
        }],
    },
];
