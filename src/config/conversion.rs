use crate::BrikError;
use crate::ast::Value;

fn type_error(expected: &str, got: &Value) -> BrikError {
    BrikError::TypeError {
        message: format!("Expected {}, got {:?}", expected, got),
        hint: Some(format!("Use a {} value in your config", expected)),
    }
}

impl TryFrom<Value> for String {
    type Error = BrikError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(type_error("string", &other)),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = BrikError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(n),
            other => Err(type_error("integer", &other)),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = BrikError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(n) => Ok(n),
            Value::Int(n) => Ok(n as f64),
            other => Err(type_error("number", &other)),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = BrikError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|n| n as f32)
    }
}

macro_rules! impl_try_from_int {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = BrikError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    let n = i64::try_from(value)?;
                    <$ty>::try_from(n).map_err(|_| BrikError::TypeError {
                        message: format!(
                            "Integer {} is out of range for {}", n, stringify!($ty)
                        ),
                        hint: None,
                    })
                }
            }
        )*
    };
}

impl_try_from_int!(i32, u64, u32, u16, u8, usize);

impl TryFrom<Value> for Vec<Value> {
    type Error = BrikError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(items) => Ok(items),
            other => Err(type_error("list", &other)),
        }
    }
}

impl TryFrom<Value> for Vec<String> {
    type Error = BrikError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let items = Vec::<Value>::try_from(value)?;
        items.into_iter().map(String::try_from).collect()
    }
}

impl TryFrom<Value> for Vec<i64> {
    type Error = BrikError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let items = Vec::<Value>::try_from(value)?;
        items.into_iter().map(i64::try_from).collect()
    }
}
