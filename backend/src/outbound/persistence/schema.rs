//! Diesel table definitions.
//!
//! These mirror `backend/schema.sql`. Column names keep the Portuguese names
//! used by the existing database.

diesel::table! {
    /// Authors.
    autores (id) {
        /// Serial primary key.
        id -> Int4,
        /// Author name; never blank.
        nome -> Varchar,
        /// Free-form birth date.
        data_nascimento -> Nullable<Varchar>,
        /// Nationality.
        nacionalidade -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Books. `autor_id` has no foreign key constraint.
    livros (id) {
        /// Serial primary key.
        id -> Int4,
        /// Title; never blank.
        titulo -> Varchar,
        /// Author reference, checked on write only.
        autor_id -> Int4,
        /// Year of publication.
        ano_publicacao -> Int4,
        /// Genre.
        genero -> Nullable<Varchar>,
    }
}

diesel::allow_tables_to_appear_in_same_query!(autores, livros);
