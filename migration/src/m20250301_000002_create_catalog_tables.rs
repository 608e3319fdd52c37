use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Regions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Regions::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Regions::Name).string().not_null())
                    .col(ColumnDef::new(Regions::Slug).string().not_null().unique_key())
                    .col(ColumnDef::new(Regions::Description).text().null())
                    .col(ColumnDef::new(Regions::Latitude).double().null())
                    .col(ColumnDef::new(Regions::Longitude).double().null())
                    .col(ColumnDef::new(Regions::SortOrder).integer().not_null().default(0))
                    .col(ColumnDef::new(Regions::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Amenities::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Amenities::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Amenities::Name).string().not_null())
                    .col(ColumnDef::new(Amenities::Slug).string().not_null().unique_key())
                    .col(ColumnDef::new(Amenities::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Media::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Media::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Media::FileName).string().not_null())
                    .col(ColumnDef::new(Media::Path).string().not_null())
                    .col(ColumnDef::new(Media::MimeType).string().not_null())
                    .col(ColumnDef::new(Media::SizeBytes).big_integer().not_null())
                    .col(ColumnDef::new(Media::UploadedBy).string().null())
                    .col(ColumnDef::new(Media::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Trails::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Trails::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Trails::Name).string().not_null())
                    .col(ColumnDef::new(Trails::Slug).string().not_null().unique_key())
                    .col(ColumnDef::new(Trails::Description).text().null())
                    .col(ColumnDef::new(Trails::RegionId).string().null())
                    .col(ColumnDef::new(Trails::Status).string_len(16).not_null())
                    .col(ColumnDef::new(Trails::Difficulty).string_len(16).not_null())
                    .col(ColumnDef::new(Trails::LengthKm).double().null())
                    .col(ColumnDef::new(Trails::ElevationGainM).integer().null())
                    .col(ColumnDef::new(Trails::FeaturedMediaId).string().null())
                    .col(ColumnDef::new(Trails::CreatedBy).string().null())
                    .col(ColumnDef::new(Trails::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Trails::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trails_region_id")
                            .from(Trails::Table, Trails::RegionId)
                            .to(Regions::Table, Regions::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trails_featured_media_id")
                            .from(Trails::Table, Trails::FeaturedMediaId)
                            .to(Media::Table, Media::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TrailAmenities::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TrailAmenities::TrailId).string().not_null())
                    .col(ColumnDef::new(TrailAmenities::AmenityId).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(TrailAmenities::TrailId)
                            .col(TrailAmenities::AmenityId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trail_amenities_trail_id")
                            .from(TrailAmenities::Table, TrailAmenities::TrailId)
                            .to(Trails::Table, Trails::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trail_amenities_amenity_id")
                            .from(TrailAmenities::Table, TrailAmenities::AmenityId)
                            .to(Amenities::Table, Amenities::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TrailImages::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TrailImages::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(TrailImages::TrailId).string().not_null())
                    .col(ColumnDef::new(TrailImages::MediaId).string().not_null())
                    .col(ColumnDef::new(TrailImages::ImageType).string_len(16).not_null())
                    .col(ColumnDef::new(TrailImages::Caption).string().null())
                    .col(ColumnDef::new(TrailImages::SortOrder).integer().not_null().default(0))
                    .col(ColumnDef::new(TrailImages::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trail_images_trail_id")
                            .from(TrailImages::Table, TrailImages::TrailId)
                            .to(Trails::Table, Trails::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trail_images_media_id")
                            .from(TrailImages::Table, TrailImages::MediaId)
                            .to(Media::Table, Media::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GroupHikes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(GroupHikes::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(GroupHikes::Title).string().not_null())
                    .col(ColumnDef::new(GroupHikes::OrganizerId).string().not_null())
                    .col(ColumnDef::new(GroupHikes::CompanyId).string().null())
                    .col(ColumnDef::new(GroupHikes::TrailId).string().null())
                    .col(ColumnDef::new(GroupHikes::Status).string_len(16).not_null())
                    .col(ColumnDef::new(GroupHikes::StartsAt).big_integer().null())
                    .col(ColumnDef::new(GroupHikes::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(GroupHikes::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_hikes_trail_id")
                            .from(GroupHikes::Table, GroupHikes::TrailId)
                            .to(Trails::Table, Trails::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_group_hikes_organizer_id")
                    .table(GroupHikes::Table)
                    .col(GroupHikes::OrganizerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ActivityLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ActivityLogs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ActivityLogs::UserId).string().null())
                    .col(ColumnDef::new(ActivityLogs::Action).string().not_null())
                    .col(ColumnDef::new(ActivityLogs::SubjectType).string().null())
                    .col(ColumnDef::new(ActivityLogs::SubjectId).string().null())
                    .col(ColumnDef::new(ActivityLogs::Description).text().null())
                    .col(ColumnDef::new(ActivityLogs::IpAddress).string().null())
                    .col(ColumnDef::new(ActivityLogs::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_activity_logs_created_at")
                    .table(ActivityLogs::Table)
                    .col(ActivityLogs::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActivityLogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GroupHikes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TrailImages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TrailAmenities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Trails::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Media::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Amenities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Regions::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Regions {
    Table,
    Id,
    Name,
    Slug,
    Description,
    Latitude,
    Longitude,
    SortOrder,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Amenities {
    Table,
    Id,
    Name,
    Slug,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Media {
    Table,
    Id,
    FileName,
    Path,
    MimeType,
    SizeBytes,
    UploadedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Trails {
    Table,
    Id,
    Name,
    Slug,
    Description,
    RegionId,
    Status,
    Difficulty,
    LengthKm,
    ElevationGainM,
    FeaturedMediaId,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TrailAmenities {
    Table,
    TrailId,
    AmenityId,
}

#[derive(DeriveIden)]
enum TrailImages {
    Table,
    Id,
    TrailId,
    MediaId,
    ImageType,
    Caption,
    SortOrder,
    CreatedAt,
}

#[derive(DeriveIden)]
enum GroupHikes {
    Table,
    Id,
    Title,
    OrganizerId,
    CompanyId,
    TrailId,
    Status,
    StartsAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ActivityLogs {
    Table,
    Id,
    UserId,
    Action,
    SubjectType,
    SubjectId,
    Description,
    IpAddress,
    CreatedAt,
}
