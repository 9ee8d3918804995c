//! Shared kind lists.
//!
//! `SyntaxKind` is the concatenation of every [`crate::TokenKind`] followed
//! by one node kind per [`crate::RuleName`]. Both lists are kept here so the
//! numbering used by `rowan` stays in one place. Token names must follow the
//! declaration order of `TokenKind`.

macro_rules! for_each_token_kind {
    ($callback:ident $([$($prefix:tt)*])?) => {
        $callback! {
            $([$($prefix)*])?
            Whitespace,
            Newline,
            LineComment,
            BlockComment,
            Shebang,
            Semicolon,
            Comma,
            Dot,
            LParen,
            RParen,
            LBracket,
            RBracket,
            LBrace,
            RBrace,
            At,
            Hash,
            Tilde,
            Question,
            Colon,
            Dollar,
            Eq,
            Bang,
            Lt,
            Gt,
            Minus,
            Ampersand,
            Pipe,
            Plus,
            Star,
            Slash,
            Caret,
            Percent,
            Underscore,
            KwAs,
            KwAsync,
            KwAwait,
            KwBreak,
            KwConst,
            KwContinue,
            KwCrate,
            KwDyn,
            KwElse,
            KwEnum,
            KwExtern,
            KwFalse,
            KwFn,
            KwFor,
            KwIf,
            KwImpl,
            KwIn,
            KwLet,
            KwLoop,
            KwMatch,
            KwMod,
            KwMove,
            KwMut,
            KwPub,
            KwRef,
            KwReturn,
            KwSelfValue,
            KwSelfType,
            KwStatic,
            KwStruct,
            KwSuper,
            KwTrait,
            KwTrue,
            KwType,
            KwUnsafe,
            KwUse,
            KwWhere,
            KwWhile,
            NumberLiteral,
            StringLiteral,
            ByteStringLiteral,
            CStringLiteral,
            CharLiteral,
            ByteLiteral,
            Lifetime,
            Ident,
            Error,
            Eof,
        }
    };
}

macro_rules! for_each_rule_name {
    ($callback:ident $([$($prefix:tt)*])?) => {
        $callback! {
            $([$($prefix)*])?
            // lexical
            Spc => "SPC",
            Identifier => "IDENTIFIER",
            LifetimeName => "LIFETIME",
            FloatLiteral => "FLOAT_LITERAL",
            LiteralExpression => "LITERAL_EXPRESSION",
            // macros and attributes
            DelimTokenTree => "DELIM_TOKEN_TREE",
            TokenTree => "TOKEN_TREE",
            MacroInvocation => "MACRO_INVOCATION",
            MacroInvocationSemi => "MACRO_INVOCATION_SEMI",
            MacroRulesDefinition => "MACRO_RULES_DEFINITION",
            OuterAttribute => "OUTER_ATTRIBUTE",
            InnerAttribute => "INNER_ATTRIBUTE",
            Attr => "ATTR",
            AttrInput => "ATTR_INPUT",
            // paths
            SimplePath => "SIMPLE_PATH",
            SimplePathSegment => "SIMPLE_PATH_SEGMENT",
            PathInExpression => "PATH_IN_EXPRESSION",
            PathExprSegment => "PATH_EXPR_SEGMENT",
            PathIdentSegment => "PATH_IDENT_SEGMENT",
            QualifiedPathType => "QUALIFIED_PATH_TYPE",
            QualifiedPathInExpression => "QUALIFIED_PATH_IN_EXPRESSION",
            QualifiedPathInType => "QUALIFIED_PATH_IN_TYPE",
            TypePath => "TYPE_PATH",
            TypePathSegment => "TYPE_PATH_SEGMENT",
            TypePathFn => "TYPE_PATH_FN",
            GenericArgs => "GENERIC_ARGS",
            GenericArg => "GENERIC_ARG",
            GenericArgsBinding => "GENERIC_ARGS_BINDING",
            GenericArgsBounds => "GENERIC_ARGS_BOUNDS",
            GenericArgsConst => "GENERIC_ARGS_CONST",
            // types
            Type => "TYPE",
            TypeNoBounds => "TYPE_NO_BOUNDS",
            ParenthesizedType => "PARENTHESIZED_TYPE",
            TupleType => "TUPLE_TYPE",
            NeverType => "NEVER_TYPE",
            RawPointerType => "RAW_POINTER_TYPE",
            ReferenceType => "REFERENCE_TYPE",
            ArrayType => "ARRAY_TYPE",
            SliceType => "SLICE_TYPE",
            InferredType => "INFERRED_TYPE",
            ImplTraitType => "IMPL_TRAIT_TYPE",
            ImplTraitTypeOneBound => "IMPL_TRAIT_TYPE_ONE_BOUND",
            TraitObjectType => "TRAIT_OBJECT_TYPE",
            TraitObjectTypeOneBound => "TRAIT_OBJECT_TYPE_ONE_BOUND",
            BareFunctionType => "BARE_FUNCTION_TYPE",
            MaybeNamedParam => "MAYBE_NAMED_PARAM",
            TypeParamBounds => "TYPE_PARAM_BOUNDS",
            TypeParamBound => "TYPE_PARAM_BOUND",
            TraitBound => "TRAIT_BOUND",
            UseBound => "USE_BOUND",
            LifetimeBounds => "LIFETIME_BOUNDS",
            ForLifetimes => "FOR_LIFETIMES",
            // generics
            GenericParams => "GENERIC_PARAMS",
            GenericParam => "GENERIC_PARAM",
            LifetimeParam => "LIFETIME_PARAM",
            TypeParam => "TYPE_PARAM",
            ConstParam => "CONST_PARAM",
            WhereClause => "WHERE_CLAUSE",
            WhereClauseItem => "WHERE_CLAUSE_ITEM",
            // patterns
            Pattern => "PATTERN",
            PatternNoTopAlt => "PATTERN_NO_TOP_ALT",
            PatternWithoutRange => "PATTERN_WITHOUT_RANGE",
            LiteralPattern => "LITERAL_PATTERN",
            IdentifierPattern => "IDENTIFIER_PATTERN",
            WildcardPattern => "WILDCARD_PATTERN",
            RestPattern => "REST_PATTERN",
            ReferencePattern => "REFERENCE_PATTERN",
            StructPattern => "STRUCT_PATTERN",
            StructPatternField => "STRUCT_PATTERN_FIELD",
            TupleStructPattern => "TUPLE_STRUCT_PATTERN",
            TuplePattern => "TUPLE_PATTERN",
            GroupedPattern => "GROUPED_PATTERN",
            SlicePattern => "SLICE_PATTERN",
            PathPattern => "PATH_PATTERN",
            RangePattern => "RANGE_PATTERN",
            RangePatternBound => "RANGE_PATTERN_BOUND",
            // expressions
            Expression => "EXPRESSION",
            ExpressionNoStruct => "EXPRESSION_NO_STRUCT",
            RangeExpression => "RANGE_EXPRESSION",
            RangeExpressionNoStruct => "RANGE_EXPRESSION_NO_STRUCT",
            OperatorExpression => "OPERATOR_EXPRESSION",
            OperatorExpressionNoStruct => "OPERATOR_EXPRESSION_NO_STRUCT",
            UnaryExpression => "UNARY_EXPRESSION",
            UnaryExpressionNoStruct => "UNARY_EXPRESSION_NO_STRUCT",
            PostfixExpression => "POSTFIX_EXPRESSION",
            PostfixExpressionNoStruct => "POSTFIX_EXPRESSION_NO_STRUCT",
            PrimaryExpression => "PRIMARY_EXPRESSION",
            PrimaryExpressionNoStruct => "PRIMARY_EXPRESSION_NO_STRUCT",
            AssignmentOperator => "ASSIGNMENT_OPERATOR",
            BinaryOperator => "BINARY_OPERATOR",
            PrefixOperator => "PREFIX_OPERATOR",
            TypeCastExpression => "TYPE_CAST_EXPRESSION",
            ErrorPropagationExpression => "ERROR_PROPAGATION_EXPRESSION",
            AwaitExpression => "AWAIT_EXPRESSION",
            MethodCallExpression => "METHOD_CALL_EXPRESSION",
            FieldExpression => "FIELD_EXPRESSION",
            TupleIndex => "TUPLE_INDEX",
            CallExpression => "CALL_EXPRESSION",
            IndexExpression => "INDEX_EXPRESSION",
            CallParams => "CALL_PARAMS",
            PathExpression => "PATH_EXPRESSION",
            TupleExpression => "TUPLE_EXPRESSION",
            TupleElements => "TUPLE_ELEMENTS",
            GroupedExpression => "GROUPED_EXPRESSION",
            ArrayExpression => "ARRAY_EXPRESSION",
            ArrayElements => "ARRAY_ELEMENTS",
            StructExpression => "STRUCT_EXPRESSION",
            StructExprField => "STRUCT_EXPR_FIELD",
            StructBase => "STRUCT_BASE",
            ClosureExpression => "CLOSURE_EXPRESSION",
            ClosureParameters => "CLOSURE_PARAMETERS",
            ClosureParam => "CLOSURE_PARAM",
            ContinueExpression => "CONTINUE_EXPRESSION",
            BreakExpression => "BREAK_EXPRESSION",
            ReturnExpression => "RETURN_EXPRESSION",
            UnderscoreExpression => "UNDERSCORE_EXPRESSION",
            ExpressionWithBlock => "EXPRESSION_WITH_BLOCK",
            BlockExpression => "BLOCK_EXPRESSION",
            ConstBlockExpression => "CONST_BLOCK_EXPRESSION",
            UnsafeBlockExpression => "UNSAFE_BLOCK_EXPRESSION",
            AsyncBlockExpression => "ASYNC_BLOCK_EXPRESSION",
            LoopExpression => "LOOP_EXPRESSION",
            LoopLabel => "LOOP_LABEL",
            InfiniteLoopExpression => "INFINITE_LOOP_EXPRESSION",
            PredicateLoopExpression => "PREDICATE_LOOP_EXPRESSION",
            IteratorLoopExpression => "ITERATOR_LOOP_EXPRESSION",
            LabelBlockExpression => "LABEL_BLOCK_EXPRESSION",
            IfExpression => "IF_EXPRESSION",
            Conditions => "CONDITIONS",
            LetCondition => "LET_CONDITION",
            MatchExpression => "MATCH_EXPRESSION",
            MatchArm => "MATCH_ARM",
            MatchArmGuard => "MATCH_ARM_GUARD",
            // statements
            Statement => "STATEMENT",
            LetStatement => "LET_STATEMENT",
            ExpressionStatement => "EXPRESSION_STATEMENT",
            // items
            CompilationUnit => "COMPILATION_UNIT",
            Item => "ITEM",
            VisItem => "VIS_ITEM",
            Visibility => "VISIBILITY",
            Module => "MODULE",
            ExternCrate => "EXTERN_CRATE",
            UseDeclaration => "USE_DECLARATION",
            UseTree => "USE_TREE",
            Function => "FUNCTION",
            FunctionQualifiers => "FUNCTION_QUALIFIERS",
            Abi => "ABI",
            FunctionParameters => "FUNCTION_PARAMETERS",
            SelfParam => "SELF_PARAM",
            ShorthandSelf => "SHORTHAND_SELF",
            TypedSelf => "TYPED_SELF",
            FunctionParam => "FUNCTION_PARAM",
            FunctionReturnType => "FUNCTION_RETURN_TYPE",
            TypeAlias => "TYPE_ALIAS",
            Struct => "STRUCT",
            StructStruct => "STRUCT_STRUCT",
            TupleStruct => "TUPLE_STRUCT",
            StructFields => "STRUCT_FIELDS",
            StructField => "STRUCT_FIELD",
            TupleFields => "TUPLE_FIELDS",
            TupleField => "TUPLE_FIELD",
            Enumeration => "ENUMERATION",
            EnumItems => "ENUM_ITEMS",
            EnumItem => "ENUM_ITEM",
            EnumItemTuple => "ENUM_ITEM_TUPLE",
            EnumItemStruct => "ENUM_ITEM_STRUCT",
            EnumItemDiscriminant => "ENUM_ITEM_DISCRIMINANT",
            Union => "UNION",
            ConstantItem => "CONSTANT_ITEM",
            StaticItem => "STATIC_ITEM",
            Trait => "TRAIT",
            Implementation => "IMPLEMENTATION",
            InherentImpl => "INHERENT_IMPL",
            TraitImpl => "TRAIT_IMPL",
            ExternBlock => "EXTERN_BLOCK",
            ExternalItem => "EXTERNAL_ITEM",
            AssociatedItem => "ASSOCIATED_ITEM",
        }
    };
}

pub(crate) use for_each_rule_name;
pub(crate) use for_each_token_kind;
