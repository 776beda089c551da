use typed_rules::{
    equal, get, includes, is, not_equal, rule, schema, secure, Collection, DatabaseRulesBuilder,
    List, RuleType, Text, TypeTag, Value,
};

schema! {
    struct Account {
        owner_id: Text = "ownerId",
        member_ids: List<Text> = "memberIds",
    }

    struct Todo {
        account_id: Text = "accountId",
        title: Text,
    }
}

fn main() {
    env_logger::init();

    let accounts = Collection::<Account>::new("accounts");
    let todos = Collection::<Todo>::new("todos");

    let account_rules = secure(
        &accounts,
        [
            rule::<Account>([RuleType::Read], |ctx| {
                vec![includes(ctx.resource.data().member_ids(), ctx.request.auth().uid())]
            }),
            rule::<Account>([RuleType::Create, RuleType::Update], |ctx| {
                let data = ctx.request.resource().data();
                vec![
                    not_equal(ctx.request.auth().uid(), Value::Null),
                    equal(data.owner_id(), ctx.request.auth().uid()),
                    is(data.member_ids(), TypeTag::List),
                ]
            }),
        ],
    );

    let todo_rules = secure(
        &todos,
        [rule::<Todo>([RuleType::Read, RuleType::Write], |ctx| {
            let account = get(&accounts, ctx.resource.data().account_id());
            vec![
                includes(account.data().member_ids(), ctx.request.auth().uid()),
                is(ctx.request.resource().data().title(), TypeTag::String),
            ]
        })],
    );

    let document = DatabaseRulesBuilder::new()
        .collection(account_rules)
        .collection(todo_rules)
        .build();

    match std::env::args().nth(1) {
        Some(target) => match document.write_to_file(&target) {
            Ok(()) => println!("Wrote rules to {target}"),
            Err(err) => eprintln!("{err}"),
        },
        None => println!("{document}"),
    }
}
