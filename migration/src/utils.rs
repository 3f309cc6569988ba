use sea_orm_migration::prelude::*;

/// Auto-incrementing integer primary key.
pub(crate) fn id_column<C: IntoIden>(column: C) -> ColumnDef {
    ColumnDef::new(column)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

/// Foreign key that removes the referencing row together with its parent.
pub(crate) fn cascade<FT, FC, TT, TC>(
    name: &str,
    from: (FT, FC),
    to: (TT, TC),
) -> ForeignKeyCreateStatement
where
    FT: IntoTableRef,
    FC: IdenList,
    TT: IntoTableRef,
    TC: IdenList,
{
    ForeignKey::create()
        .name(name)
        .from(from.0, from.1)
        .to(to.0, to.1)
        .on_delete(ForeignKeyAction::Cascade)
        .on_update(ForeignKeyAction::NoAction)
        .to_owned()
}
