//! Built-in glyph metrics of the default chat font.

/// Normal width of a glyph drawn by the default font, or `None` if the font
/// has no sprite for it. Bold adds one unit on top.
pub(crate) const fn builtin_width(ch: char) -> Option<u16> {
    let width = match ch {
        ' ' => 3,

        '!' | '\'' | ',' | '.' | ':' | ';' | '|' | 'i' | 'l' => 1,
        '`' => 2,
        '"' | 'I' | '[' | ']' => 3,
        '(' | ')' | '*' | '<' | '>' | '{' | '}' | 'f' | 'k' | 't' => 4,
        '@' | '~' => 6,
        '#' | '$' | '%' | '&' | '+' | '-' | '/' | '=' | '?' | '\\' | '^' | '_' => 5,
        '0'..='9' | 'A'..='Z' | 'a'..='z' => 5,

        'ì' | 'í' | '¡' => 2,
        'ï' | 'î' => 3,
        'ª' | 'º' => 4,
        '®' | 'Æ' | 'æ' => 6,
        'Ç' | 'ü' | 'é' | 'â' | 'ä' | 'à' | 'å' | 'ç' | 'ê' | 'ë' | 'è' | 'Ä' | 'Å' | 'É'
        | 'ô' | 'ö' | 'ò' | 'û' | 'ù' | 'ÿ' | 'Ö' | 'Ü' | 'ø' | '£' | 'Ø' | '×' | 'ƒ'
        | 'á' | 'ó' | 'ú' | 'ñ' | 'Ñ' | '¿' | '¬' | '½' | '¼' | '«' | '»' => 5,

        _ => return None,
    };
    Some(width)
}
