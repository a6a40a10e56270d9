use jsonval::value::{Array, Member, Object, Tag, ToValue, Value};

struct Event {
    date: String,
    description: String,
    coords: Option<(f64, f64)>,
}

impl ToValue for Event {
    fn build_value(&self, res: &mut Value) {
        let mut object = Object::new();
        object
            .insert("date", &self.date)
            .insert("description", &self.description);
        match self.coords {
            Some((lat, lon)) => object.insert("coords", &vec![lat, lon]),
            None => object.insert("coords", &None::<f64>),
        };
        res.set(&object);
    }
}

#[test]
fn parsed_trees_should_be_editable_in_place() {
    let mut value = jsonval::parse_str(r#"{"list":[1,2],"name":"x"}"#).unwrap();
    value
        .object_mut()
        .get_mut("list")
        .unwrap()
        .array_mut()
        .push(3)
        .push("four");
    value.object_mut().push(Member::new("extra", true));
    assert_eq!(
        value.to_json(),
        r#"{"list":[1,2,3,"four"],"name":"x","extra":true}"#
    );
}

#[test]
fn subtrees_should_move_out_of_parsed_documents() {
    let mut value = jsonval::parse_str(r#"{"inner":{"a":[true]}}"#).unwrap();
    let inner = value.object_mut().get_mut("inner").unwrap().take();
    assert_eq!(inner.to_json(), r#"{"a":[true]}"#);
    assert_eq!(value.object().get("inner").unwrap().tag(), Tag::Invalid);
    assert_eq!(value.to_json(), r#"{"inner":null}"#);

    let mut target = Value::from(1);
    let mut source = inner;
    target.move_from(&mut source);
    assert_eq!(target.tag(), Tag::Object);
    assert!(!source.is_valid());
    drop(source);
}

#[test]
fn custom_types_should_serialize_and_parse_back() {
    let events = vec![
        Event {
            date: "1969/07/20".to_string(),
            description: "First crewed Moon landing".to_string(),
            coords: Some((0.5, 23.25)),
        },
        Event {
            date: "-300".to_string(),
            description: "Capital moves".to_string(),
            coords: None,
        },
    ];
    let value = events.to_value();
    let text = value.to_json();
    assert_eq!(
        text,
        concat!(
            r#"[{"date":"1969/07/20","description":"First crewed Moon landing","coords":[0.5,23.25]},"#,
            r#"{"date":"-300","description":"Capital moves","coords":null}]"#
        )
    );
    assert_eq!(jsonval::parse_str(&text).unwrap(), value);
}

#[test]
fn traversal_should_visit_members_in_document_order() {
    let value = jsonval::parse_str(r#"{"b":[1,{"c":null}],"a":"s"}"#).unwrap();
    let mut tags = vec![];
    let mut pending: Vec<&Value> = vec![&value];
    while let Some(next) = pending.pop() {
        tags.push(next.tag());
        match next {
            Value::Object(object) => pending.extend(object.iter().rev().map(Member::value)),
            Value::Array(array) => pending.extend(array.iter().rev()),
            _ => {}
        }
    }
    assert_eq!(
        tags,
        [
            Tag::Object,
            Tag::Array,
            Tag::Number,
            Tag::Object,
            Tag::Null,
            Tag::String
        ]
    );
}

#[test]
fn arrays_should_collect_from_iterators() {
    let array: Array = (1..=3).collect();
    assert_eq!(Value::from(array).to_json(), "[1,2,3]");
}
