/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */


//! Walk through a connection picker the way a SQL client would use it: pick one
//! connection, pick some tables, then ask whether to go again.
//!
//! Run it with `cargo run --example pick_connection`.

use qgo_dropdown::{confirm_async,
                   multi_select_async,
                   select_async,
                   SelectError,
                   SelectOption};

#[tokio::main]
async fn main() -> miette::Result<()> {
    let connections = [
        SelectOption::new("pg-local", "postgres @ localhost:5432"),
        SelectOption::new("pg-staging", "postgres @ staging.internal:5432"),
        SelectOption::new("mysql-legacy", "mysql @ legacy.internal:3306"),
    ];
    let tables = ["users", "orders", "invoices", "audit_log"].map(SelectOption::from);

    loop {
        let connection = match select_async("Pick a connection", &connections).await {
            Ok(it) => it,
            Err(SelectError::Cancelled) => break,
            Err(error) => return Err(error.into()),
        };

        let chosen_tables = match multi_select_async("Tables to export", &tables).await {
            Ok(it) => it,
            // Back to the connection list.
            Err(SelectError::Cancelled) => continue,
            Err(error) => return Err(error.into()),
        };

        println!("{connection}: {chosen_tables:?}");

        if !confirm_async("Connect to another database?").await? {
            break;
        }
    }

    Ok(())
}
