//! Rank and verification badges shown next to usernames.

use api::Rank;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBuilding, FaCircleCheck, FaCrown, FaGem, FaLaptop,
};
use dioxus_free_icons::Icon;

/// Small inline icon for a member's rank. Plain unverified members get nothing.
#[component]
pub fn RankBadge(rank: Rank, is_verified: bool) -> Element {
    let badge = match rank {
        Rank::Admin => Some(("#ffd700", rsx! { Icon { icon: FaCrown, width: 14, height: 14 } })),
        Rank::Developer => Some(("#00ff00", rsx! { Icon { icon: FaLaptop, width: 14, height: 14 } })),
        Rank::MasonOfficial => {
            Some(("#00bfff", rsx! { Icon { icon: FaBuilding, width: 14, height: 14 } }))
        }
        Rank::Vip => Some(("#ff00ff", rsx! { Icon { icon: FaGem, width: 14, height: 14 } })),
        Rank::Member => is_verified
            .then(|| ("#00ff00", rsx! { Icon { icon: FaCircleCheck, width: 14, height: 14 } })),
    };

    rsx! {
        if let Some((color, icon)) = badge {
            span {
                class: "rank-badge",
                title: "{rank.label()}",
                style: "display: inline-flex; align-items: center; color: {color};",
                {icon}
            }
        }
    }
}
