use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Registro de usuário. Normalmente um objeto JSON aberto cujo único campo
/// com significado é `id`; a ordem dos campos é preservada.
///
/// O body aceito pelos handlers pode ser um array (como no `express.json`),
/// então o registro guarda qualquer valor JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object, example = json!({"id": 1, "name": "Alice"}))]
pub struct User(pub Value);

impl User {
    /// Valor numérico de `id`, se houver
    pub fn id(&self) -> Option<f64> {
        self.0.get("id").and_then(Value::as_f64)
    }

    pub fn has_id(&self, id: f64) -> bool {
        self.id() == Some(id)
    }

    /// Sobrescreve `id` mantendo a posição do campo quando já existe.
    /// Em arrays a propriedade não sobrevive à serialização, então nada muda.
    pub fn set_id(&mut self, id: u64) {
        if let Value::Object(fields) = &mut self.0 {
            fields.insert("id".to_string(), Value::from(id));
        }
    }

    /// Merge raso `{ ...existente, ...body }`: campos do body vencem
    pub fn merged_with(&self, body: &Value) -> User {
        let mut merged = spread(&self.0);
        for (key, value) in spread(body) {
            merged.insert(key, value);
        }
        User(Value::Object(merged))
    }
}

/// Propriedades próprias enumeráveis de um valor, como o spread `...v`
fn spread(value: &Value) -> Map<String, Value> {
    match value {
        Value::Object(fields) => fields.clone(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| (i.to_string(), item.clone()))
            .collect(),
        Value::String(s) => s
            .chars()
            .enumerate()
            .map(|(i, c)| (i.to_string(), Value::String(c.to_string())))
            .collect(),
        _ => Map::new(),
    }
}

impl From<Value> for User {
    fn from(value: Value) -> Self {
        User(value)
    }
}
