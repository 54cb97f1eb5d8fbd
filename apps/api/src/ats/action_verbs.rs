/// The fixed action-verb vocabulary the scorer looks for. Matching is a
/// case-insensitive substring test over the resume's combined text, so each
/// entry is stored lowercase.
pub const ACTION_VERBS: &[&str] = &[
    "built",
    "developed",
    "designed",
    "implemented",
    "launched",
    "shipped",
    "led",
    "managed",
    "created",
    "optimized",
    "automated",
    "improved",
    "delivered",
    "architected",
    "reduced",
    "increased",
    "migrated",
    "scaled",
    "mentored",
    "streamlined",
];
