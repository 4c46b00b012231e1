// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    categories (id) {
        id -> BigInt,
        name -> Text,
    }
}

diesel::table! {
    users (id) {
        id -> BigInt,
        name -> Text,
        user_type -> Text,
    }
}

diesel::table! {
    solicitations (id) {
        id -> BigInt,
        protocol -> Text,
        status -> Text,
        category_id -> BigInt,
        reporter_id -> BigInt,
        latitude -> Double,
        longitude -> Double,
        address -> Nullable<Text>,
        description -> Text,
        created_at -> Text,
        updated_at -> Text,
    }
}

diesel::table! {
    transition_records (id) {
        id -> BigInt,
        solicitation_id -> BigInt,
        actor_id -> Nullable<BigInt>,
        from_status -> Text,
        to_status -> Text,
        reason -> Nullable<Text>,
        occurred_at -> Text,
    }
}

diesel::table! {
    notifications (id) {
        id -> BigInt,
        recipient_user_id -> BigInt,
        solicitation_id -> BigInt,
        title -> Text,
        body -> Text,
        is_read -> Integer,
        created_at -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    categories,
    users,
    solicitations,
    transition_records,
    notifications,
);
