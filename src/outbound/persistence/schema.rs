//! Diesel schema definitions, mirroring the embedded migrations.

diesel::table! {
    users (id) {
        id -> Integer,
        email -> Text,
        password_salt -> Text,
        password_digest -> Text,
        created_at -> Timestamp,
    }
}

diesel::table! {
    cases (id) {
        id -> Integer,
        title -> Text,
        client_name -> Text,
        description -> Text,
        created_at -> Timestamp,
        owner_id -> Integer,
    }
}

diesel::table! {
    tasks (id) {
        id -> Integer,
        description -> Text,
        due_date -> Date,
        completed -> Bool,
        case_id -> Integer,
    }
}

diesel::joinable!(cases -> users (owner_id));
diesel::joinable!(tasks -> cases (case_id));

diesel::allow_tables_to_appear_in_same_query!(users, cases, tasks);
