//! Grammar document fixtures for tests.

/// URL the built-in table reads the SQL:2011 foundation grammar from.
pub const FOUNDATION_GRAMMAR_URL: &str =
    "https://raw.githubusercontent.com/apla/sql-overview/master/sql-2011-foundation-grammar.txt";

/// Excerpt in the layout of the SQL:2011 foundation grammar text.
pub const FOUNDATION_EXCERPT: &str = "\
BNF Grammar for ISO/IEC 9075-2:2011 - Database Language SQL (SQL-2011) SQL/Foundation

5 Lexical elements

5.2 <token> and <separator>

Function

Specify lexical units (tokens and separators) that participate in SQL language.

<reserved word> ::=
    ABS | ALL | ALLOCATE | ALTER | AND | ANY | ARE | ARRAY | AS
  | BEGIN | BETWEEN | BIGINT

<non-reserved word> ::=
    A
  | ABSOLUTE | ACTION | ADA | ADD | ADMIN | AFTER | ALWAYS | ASC



  | BEFORE | BERNOULLI | BREADTH

13.5 <SQL procedure statement>

<SQL executable statement> ::=
    <SQL schema statement>
  | <SQL data statement>
  | <SQL transaction statement>
  | <SQL session statement>
  | <SQL diagnostics statement>
  | <SQL dynamic statement>
  | <implementation-defined statement>

<SQL schema statement> ::=
    <SQL schema definition statement>
  | <SQL schema manipulation statement>

<SQL schema definition statement> ::=
    <schema definition>
  | <table definition>

<SQL schema manipulation statement> ::=
    <drop schema statement>
  | <drop table statement>

<schema definition> ::=
    CREATE SCHEMA <schema name clause>
    [ <schema character set or path> ]
    [ <schema element>... ]

<table definition> ::=
    CREATE [ <table scope> ] TABLE <table name> <table contents source>

<drop schema statement> ::=
    DROP SCHEMA <schema name> <drop behavior>

<drop table statement> ::=
    DROP TABLE <table name> <drop behavior>

<SQL data statement> ::=
    <open statement>
  | <close statement>

<open statement> ::=
    OPEN <cursor name>

<close statement> ::=
    CLOSE <cursor name>

<SQL transaction statement> ::=
    <start transaction statement>
  | <commit statement>
  | <rollback statement>

<start transaction statement> ::=
    START TRANSACTION [ <transaction characteristics> ]

<commit statement> ::=
    COMMIT [ WORK ] [ AND [ NO ] CHAIN ]

<rollback statement> ::=
    ROLLBACK [ WORK ] [ AND [ NO ] CHAIN ] [ <savepoint clause> ]

<SQL session statement> ::=
    <set session characteristics statement>
  | <set session collation statement>

<set session characteristics statement> ::=
    SET SESSION CHARACTERISTICS AS <session characteristic list>

<SQL diagnostics statement> ::=
    <get diagnostics statement>

<get diagnostics statement> ::=
    GET DIAGNOSTICS <SQL diagnostics information>

<SQL dynamic statement> ::=
    <SQL  dynamic   statement>
";
