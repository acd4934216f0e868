use cosmwasm_schema::schema_for;

use fee_ledger::msg::{
    BalanceResponse, ConfigResponse, DiscountResponse, ExecuteMsg, InstantiateMsg, QueryMsg,
};

// the generated schema should expose every message variant by its snake_case name
#[test]
fn execute_schema_lists_every_operation() {
    let schema = serde_json::to_string(&schema_for!(ExecuteMsg)).unwrap();
    for name in [
        "deposit",
        "withdraw",
        "transfer",
        "transfer_business",
        "change_standard_fee",
        "change_maximum_fee",
        "add_discount",
        "remove_discount",
    ] {
        assert!(schema.contains(&format!("\"{}\"", name)), "missing {}", name);
    }
}

#[test]
fn query_and_response_schemas_build() {
    let query = serde_json::to_string(&schema_for!(QueryMsg)).unwrap();
    assert!(query.contains("\"total_supply\""));

    for schema in [
        schema_for!(InstantiateMsg),
        schema_for!(BalanceResponse),
        schema_for!(DiscountResponse),
        schema_for!(ConfigResponse),
    ] {
        assert!(schema.schema.object.is_some());
    }
}
