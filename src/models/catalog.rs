//! Fixed palette of event blocks, in display order.

use super::block::EventBlock;
use super::category::Category::{self, *};

pub const CATALOG: &[EventBlock] = &[
    EventBlock::new("Details: Drone & Venue Shots", 20, Details),
    EventBlock::new("Details: Rings/Invitations/Accessories", 20, Details),
    EventBlock::new("Details: Dress Shots", 10, Details),
    EventBlock::new("Bride (Pre-Dress): Bridemaids Group Shots", 10, BridePreDress),
    EventBlock::new("Bride (Pre-Dress): Bridemaids Individual Shots", 10, BridePreDress),
    EventBlock::new("Bride (Pre-Dress): Hair & Makeup Details", 10, BridePreDress),
    EventBlock::new("Bride (Pre-Dress): Putting Dress On", 10, BridePreDress),
    EventBlock::new("Bride (Dress On): Accessory Shots", 10, BrideDressOn),
    EventBlock::new("Bride (Dress On): Bride Portraits", 15, BrideDressOn),
    EventBlock::new("Bride (Dress On): Bridemaids Group Shots", 10, BrideDressOn),
    EventBlock::new("Bride (Dress On): Bridemaids Individual Shots", 10, BrideDressOn),
    EventBlock::new("Bride (Dress On): First Look with Parent", 10, BrideDressOn),
    EventBlock::new("Bride (Dress On): First Look with Bridemaids", 10, BrideDressOn),
    EventBlock::new("Bride (Dress On): First Look with Groom", 10, BrideDressOn),
    EventBlock::new("Narration: Bride Record Narration", 15, Narration),
    EventBlock::new("Narration: Groom Record Narration", 15, Narration),
    EventBlock::new("Groom: Assisted with Tie & Jacket", 10, Groom),
    EventBlock::new("Groom: Portraits", 15, Groom),
    EventBlock::new("Groom: Groomsmen Group Shots", 10, Groom),
    EventBlock::new("Groom: Groomsmen Individual Shots", 10, Groom),
    EventBlock::new("Ceremony: Average", 30, Ceremony),
    EventBlock::new("Ceremony: Catholic", 60, Ceremony),
    EventBlock::new("Group Photos: Family (5 Groups)", 20, GroupPhotos),
    EventBlock::new("Group Photos: Family (10 Groups)", 45, GroupPhotos),
    EventBlock::new("Group Photos: Wedding Party Shots", 15, GroupPhotos),
    EventBlock::new("Bride & Groom: Portraits", 20, BrideAndGroom),
    EventBlock::new("Reception: Grand Entrances", 10, Reception),
    EventBlock::new("Reception: Cake Cutting", 5, Reception),
    EventBlock::new("Reception: Bride & Groom Dance", 5, Reception),
    EventBlock::new("Reception: Bride & Parent Dance", 5, Reception),
    EventBlock::new("Reception: Groom & Parent Dance", 5, Reception),
    EventBlock::new("Reception: Special Dance", 5, Reception),
    EventBlock::new("Reception: Dinner", 30, Reception),
    EventBlock::new("Reception: Speeches (Per Speaker)", 10, Reception),
    EventBlock::new("Evening: Bride & Groom Golden Hour Portraits", 20, Evening),
    EventBlock::new("Evening: Open Dance Floor", 20, Evening),
    EventBlock::new("Evening: Garder Belt Toss", 15, Evening),
    EventBlock::new("Evening: Boquette Toss", 15, Evening),
];

/// Block by 1-based palette number.
pub fn by_number(n: usize) -> Option<&'static EventBlock> {
    n.checked_sub(1).and_then(|i| CATALOG.get(i))
}

/// Block whose label matches exactly.
pub fn by_label(label: &str) -> Option<&'static EventBlock> {
    CATALOG.iter().find(|b| b.label == label)
}

/// Category for any event text: the catalog entry's explicit category when
/// the label is known, otherwise a prefix guess.
pub fn category_of(label: &str) -> Category {
    by_label(label)
        .map(|b| b.category)
        .unwrap_or_else(|| Category::from_label(label))
}

pub fn in_category(category: Category) -> impl Iterator<Item = (usize, &'static EventBlock)> {
    CATALOG
        .iter()
        .enumerate()
        .filter(move |(_, b)| b.category == category)
        .map(|(i, b)| (i + 1, b))
}
