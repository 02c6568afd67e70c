/// Ordered table of corrupted sequences and their corrected forms, as they
/// appear when the damaged file is decoded as Latin-1. Nine Portuguese words
/// that lost their diacritics to a double-encoding round trip, then four
/// emoji byte sequences. Declaration order is significant: entries are
/// applied one at a time, each over the full content.
pub const REPLACEMENTS: [(&str, &str); 13] = [
    ("Mâ”œÃ\u{ad}rcia", "MÃ¡rcia"),
    ("Trâ”œÃ\u{ad}fego", "TrÃ¡fego"),
    ("Conversâ”œÃºo", "ConversÃ£o"),
    ("Mâ”œÂ®dio", "MÃ©dio"),
    ("Qualificaâ”œÂºâ”œÃºo", "QualificaÃ§Ã£o"),
    ("Catâ”œÃ\u{ad}logos", "CatÃ¡logos"),
    ("â”œÃœltimos", "Ãšltimos"),
    ("Distribuiâ”œÂºâ”œÃºo", "DistribuiÃ§Ã£o"),
    ("Geogrâ”œÃ\u{ad}fica", "GeogrÃ¡fica"),
    ("Â\u{ad}Æ’Ã¶Ã‘", "ğŸ”¥"),
    ("Â\u{ad}Æ’Æ’Ã\u{ad}", "ğŸŸ¡"),
    ("Ã”Ã˜Ã¤Â´Â©Ã…", "â„ï¸"),
    ("Â\u{ad}Æ’Ã¶Ã¤", "ğŸ”„"),
];
