use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create agents table. Agent codes are natural keys ("A001"), not
        // surrogate ids.
        manager
            .create_table(
                Table::create()
                    .table(Agents::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Agents::AgentCode).string().not_null().primary_key())
                    .col(ColumnDef::new(Agents::AgentName).string().not_null())
                    .col(ColumnDef::new(Agents::WorkingArea).string())
                    .col(ColumnDef::new(Agents::Commission).string())
                    .col(ColumnDef::new(Agents::PhoneNo).string())
                    .col(ColumnDef::new(Agents::Country).string())
                    .to_owned(),
            )
            .await?;

        // Create customers table. Monetary columns are integer cents.
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Customers::CustCode).string().not_null().primary_key())
                    .col(ColumnDef::new(Customers::CustName).string().not_null())
                    .col(ColumnDef::new(Customers::CustCity).string())
                    .col(ColumnDef::new(Customers::WorkingArea).string())
                    .col(ColumnDef::new(Customers::CustCountry).string().not_null())
                    .col(ColumnDef::new(Customers::Grade).integer())
                    .col(ColumnDef::new(Customers::OpeningAmt).big_integer().not_null())
                    .col(ColumnDef::new(Customers::ReceiveAmt).big_integer().not_null())
                    .col(ColumnDef::new(Customers::PaymentAmt).big_integer().not_null())
                    .col(ColumnDef::new(Customers::OutstandingAmt).big_integer().not_null())
                    .col(ColumnDef::new(Customers::PhoneNo).string())
                    .col(ColumnDef::new(Customers::AgentCode).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customers_agent_code")
                            .from(Customers::Table, Customers::AgentCode)
                            .to(Agents::Table, Agents::AgentCode)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Create orders table
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Orders::OrdNum).string().not_null().primary_key())
                    .col(ColumnDef::new(Orders::OrdAmount).big_integer().not_null())
                    .col(ColumnDef::new(Orders::AdvanceAmount).big_integer().not_null())
                    .col(ColumnDef::new(Orders::OrdDate).string().not_null())
                    .col(ColumnDef::new(Orders::CustCode).string().not_null())
                    .col(ColumnDef::new(Orders::AgentCode).string().not_null())
                    .col(ColumnDef::new(Orders::OrdDescription).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_cust_code")
                            .from(Orders::Table, Orders::CustCode)
                            .to(Customers::Table, Customers::CustCode)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_agent_code")
                            .from(Orders::Table, Orders::AgentCode)
                            .to(Agents::Table, Agents::AgentCode)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Indexes for the grouped aggregation queries
        manager
            .create_index(
                Index::create()
                    .name("idx_orders_cust_code")
                    .table(Orders::Table)
                    .col(Orders::CustCode)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_agent_code")
                    .table(Orders::Table)
                    .col(Orders::AgentCode)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Agents::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(Iden)]
enum Agents {
    Table,
    AgentCode,
    AgentName,
    WorkingArea,
    Commission,
    PhoneNo,
    Country,
}

#[derive(Iden)]
enum Customers {
    Table,
    CustCode,
    CustName,
    CustCity,
    WorkingArea,
    CustCountry,
    Grade,
    OpeningAmt,
    ReceiveAmt,
    PaymentAmt,
    OutstandingAmt,
    PhoneNo,
    AgentCode,
}

#[derive(Iden)]
enum Orders {
    Table,
    OrdNum,
    OrdAmount,
    AdvanceAmount,
    OrdDate,
    CustCode,
    AgentCode,
    OrdDescription,
}
