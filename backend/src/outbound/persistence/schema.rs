//! Diesel table definitions. Must match `backend/migrations`.

diesel::table! {
    /// Accounts owning bookmarks. `username` is unique.
    accounts (id) {
        id -> Int8,
        username -> Varchar,
        password -> Varchar,
    }
}

diesel::table! {
    bookmarks (id) {
        id -> Int8,
        account_id -> Int8,
        uri -> Text,
        description -> Text,
    }
}

diesel::joinable!(bookmarks -> accounts (account_id));
diesel::allow_tables_to_appear_in_same_query!(accounts, bookmarks);
