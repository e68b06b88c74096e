/*!
# `GOTO <label>`

## Purpose
Jump to a label defined with `BOOKMARK`.

## Remarks
Labels are not checked. Jumping to a label that was never defined is
reported by your assembler, not by Kokoro.

## Example
```text
bookmark top
goto top
```
```text
top:

JMP top
```

*/
