//! Initial schema migration - creates all tables from scratch.
//!
//! - `users`: signup credentials and the bearer token issued at login
//! - `planets`: planet catalog
//! - `characters`: character catalog
//! - `favorites`: a user's favorite planet or character

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Email,
    Password,
    IsActive,
    Token,
}

#[derive(Iden)]
enum Planets {
    Table,
    Id,
    Name,
    Diameter,
    RotationPeriod,
    OrbitalPeriod,
    Gravity,
    Population,
    Climate,
    Terrain,
    SurfaceWater,
}

#[derive(Iden)]
enum Characters {
    Table,
    Id,
    Name,
    Height,
    Mass,
    HairColor,
    SkinColor,
    EyeColor,
    BirthYear,
    Gender,
}

#[derive(Iden)]
enum Favorites {
    Table,
    Id,
    UserId,
    PlanetId,
    CharacterId,
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Users
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Email).string_len(120).not_null())
                    .col(ColumnDef::new(Users::Password).string_len(80).not_null())
                    .col(ColumnDef::new(Users::IsActive).boolean().not_null())
                    .col(ColumnDef::new(Users::Token).string_len(255))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-users-email-unique")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // NULL tokens do not collide in a unique index.
        manager
            .create_index(
                Index::create()
                    .name("idx-users-token-unique")
                    .table(Users::Table)
                    .col(Users::Token)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. Planets
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Planets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Planets::Name).string_len(250).not_null())
                    .col(ColumnDef::new(Planets::Diameter).integer())
                    .col(ColumnDef::new(Planets::RotationPeriod).integer())
                    .col(ColumnDef::new(Planets::OrbitalPeriod).integer())
                    .col(ColumnDef::new(Planets::Gravity).string_len(40))
                    .col(ColumnDef::new(Planets::Population).big_integer())
                    .col(ColumnDef::new(Planets::Climate).string_len(40))
                    .col(ColumnDef::new(Planets::Terrain).string_len(50))
                    .col(ColumnDef::new(Planets::SurfaceWater).integer())
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 3. Characters
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Characters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Characters::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Characters::Name).string_len(250).not_null())
                    .col(ColumnDef::new(Characters::Height).integer())
                    .col(ColumnDef::new(Characters::Mass).integer())
                    .col(ColumnDef::new(Characters::HairColor).string_len(30))
                    .col(ColumnDef::new(Characters::SkinColor).string_len(30))
                    .col(ColumnDef::new(Characters::EyeColor).string_len(30))
                    .col(ColumnDef::new(Characters::BirthYear).string_len(30))
                    .col(ColumnDef::new(Characters::Gender).string_len(30))
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 4. Favorites
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Favorites::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Favorites::UserId).integer().not_null())
                    .col(ColumnDef::new(Favorites::PlanetId).integer())
                    .col(ColumnDef::new(Favorites::CharacterId).integer())
                    // Exactly one target per favorite.
                    .check(Expr::cust(
                        "(planet_id IS NULL) <> (character_id IS NULL)",
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-favorites-user_id")
                            .from(Favorites::Table, Favorites::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-favorites-planet_id")
                            .from(Favorites::Table, Favorites::PlanetId)
                            .to(Planets::Table, Planets::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-favorites-character_id")
                            .from(Favorites::Table, Favorites::CharacterId)
                            .to(Characters::Table, Characters::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-favorites-user_id")
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse order of creation (respecting FK dependencies)
        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Characters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}
