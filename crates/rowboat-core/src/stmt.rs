mod filter;
pub use filter::{Connective, Where};

mod join;
pub use join::{Join, JoinKind};

mod operator;
pub use operator::Operator;

mod order_by;
pub use order_by::{Direction, OrderBy};

mod query;
pub use query::Query;

mod value;
pub use value::{Row, Value};
