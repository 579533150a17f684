/// SQL statements for the built-in corpus schema.
pub const CREATE_SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS language (
    code TEXT PRIMARY KEY NOT NULL,
    text_direction TEXT NOT NULL,
    font_family TEXT
);

CREATE TABLE IF NOT EXISTS corpora (
    id TEXT PRIMARY KEY NOT NULL,
    side TEXT NOT NULL,
    name TEXT,
    full_name TEXT,
    file_name TEXT,
    language_id TEXT REFERENCES language(code)
);

CREATE TABLE IF NOT EXISTS words_or_parts (
    id TEXT PRIMARY KEY NOT NULL,
    corpus_id TEXT REFERENCES corpora(id),
    side TEXT NOT NULL,
    text TEXT,
    after TEXT,
    gloss TEXT,
    position_book INTEGER,
    position_chapter INTEGER,
    position_verse INTEGER,
    position_word INTEGER,
    position_part INTEGER,
    normalized_text TEXT,
    source_verse_bcvid TEXT,
    language_id TEXT REFERENCES language(code)
);
";

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_creates_without_error() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(CREATE_SCHEMA).unwrap();
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(CREATE_SCHEMA).unwrap();
        conn.execute_batch(CREATE_SCHEMA).unwrap();
    }
}
