pub mod assignment_node;
pub mod ast_node;
pub mod binary_op_node;
pub mod block_node;
pub mod break_node;
pub mod call_node;
pub mod call_statement_node;
pub mod class_node;
pub mod continue_node;
pub mod expression_block_node;
pub mod expression_node;
pub mod field_node;
pub mod formal_node;
pub mod if_node;
pub mod index_node;
pub mod length_node;
pub mod literal_node;
pub mod local_var_node;
pub mod method_node;
pub mod new_array_node;
pub mod new_class_node;
pub mod program_node;
pub mod return_node;
pub mod statement_node;
pub mod this_node;
pub mod type_node;
pub mod unary_op_node;
pub mod var_node;
pub mod while_node;
