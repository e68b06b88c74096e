/*!
# `IF <variable> IS <comparison> <value> DO {`

## Purpose
Compile the lines up to the closing `}` so they only run when the
comparison holds.

## Remarks
The comparison is one of `greater_than`, `less_than`, `equal_to` or
`not_equal_to`. `<value>` is a literal number when it is all digits,
otherwise a variable. An unknown comparison always skips the block.

The closing `}` must start its own line. Blocks do not nest; an `IF`
inside a block is reported as an unknown line.

## Example
```text
if x is equal_to 5 do {
    call beep
}
```
```text
LDA $0200
CMP #5
BNE skip_if_0
JSR beep

skip_if_0:
```

*/
