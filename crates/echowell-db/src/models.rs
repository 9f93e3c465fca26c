/// Database row types. `password` holds the `salt:hash` string, never
/// plaintext; callers must not let it leave the process.
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: Option<u32>,
    pub college_name: Option<String>,
    pub grades: Option<String>,
    pub created_at: String,
}

/// Borrowed insert payload for the `users` collection.
pub struct NewUser<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub age: Option<u32>,
    pub college_name: Option<&'a str>,
    pub grades: Option<&'a str>,
}
